// src/headers.rs
// Assertions over the header multimap

use http::HeaderMap;

use crate::chain::Chain;
use crate::failure::Failure;
use crate::string::StringAssert;

#[derive(Debug, Clone)]
pub struct Headers {
    chain: Chain,
    headers: HeaderMap,
}

impl Headers {
    pub fn new(chain: Chain, headers: HeaderMap) -> Self {
        Self { chain, headers }
    }

    pub fn placeholder(chain: Chain) -> Self {
        Self::new(chain, HeaderMap::new())
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn raw(&self) -> &HeaderMap {
        &self.headers
    }

    /// Compares names and every value of every name. Order matters only
    /// between repeated values of the same name.
    pub fn equal(&self, expected: &HeaderMap) -> &Self {
        self.chain.check(
            || &self.headers == expected,
            || {
                Failure::value(format!(
                    "expected headers equal to:\n  {:?}\n\nbut got:\n  {:?}",
                    expected, self.headers
                ))
            },
        );
        self
    }

    pub fn contains_key(&self, name: &str) -> &Self {
        self.chain.check(
            || self.headers.contains_key(name),
            || Failure::value(format!("expected header {:?} to be present", name)),
        );
        self
    }

    pub fn not_contains_key(&self, name: &str) -> &Self {
        self.chain.check(
            || !self.headers.contains_key(name),
            || Failure::value(format!("expected header {:?} to be absent", name)),
        );
        self
    }

    /// First value of `name`. A missing header fails the chain.
    pub fn value(&self, name: &str) -> StringAssert {
        if self.chain.is_failed() {
            return StringAssert::placeholder(self.chain.clone());
        }
        match first_value(&self.headers, name) {
            Some(value) => StringAssert::new(self.chain.clone(), value),
            None => {
                self.chain
                    .fail(Failure::value(format!("expected header {:?} to be present", name)));
                StringAssert::placeholder(self.chain.clone())
            }
        }
    }

    /// All values of `name`, in the order received.
    pub fn values(&self, name: &str) -> Vec<String> {
        self.headers
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect()
    }
}

pub(crate) fn first_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
