// src/string.rs
// Assertions over a single string value

use regex::Regex;

use crate::chain::Chain;
use crate::failure::Failure;

#[derive(Debug, Clone)]
pub struct StringAssert {
    chain: Chain,
    value: String,
}

impl StringAssert {
    pub fn new(chain: Chain, value: impl Into<String>) -> Self {
        Self {
            chain,
            value: value.into(),
        }
    }

    /// Empty string over `chain`, returned when there is nothing to check.
    pub fn placeholder(chain: Chain) -> Self {
        Self::new(chain, String::new())
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn raw(&self) -> &str {
        &self.value
    }

    pub fn empty(&self) -> &Self {
        self.chain.check(
            || self.value.is_empty(),
            || Failure::value(format!("expected empty string, but got:\n  {:?}", self.value)),
        );
        self
    }

    pub fn not_empty(&self) -> &Self {
        self.chain.check(
            || !self.value.is_empty(),
            || Failure::value("expected non-empty string"),
        );
        self
    }

    pub fn equal(&self, expected: &str) -> &Self {
        self.chain.check(
            || self.value == expected,
            || Failure::value(mismatch("string", expected, &self.value)),
        );
        self
    }

    pub fn not_equal(&self, unexpected: &str) -> &Self {
        self.chain.check(
            || self.value != unexpected,
            || Failure::value(format!("expected string not equal to:\n  {:?}", unexpected)),
        );
        self
    }

    /// Case-insensitive comparison (Unicode lowercase).
    pub fn equal_fold(&self, expected: &str) -> &Self {
        self.chain.check(
            || self.value.to_lowercase() == expected.to_lowercase(),
            || Failure::value(mismatch("string (case-insensitive)", expected, &self.value)),
        );
        self
    }

    pub fn contains(&self, needle: &str) -> &Self {
        self.chain.check(
            || self.value.contains(needle),
            || {
                Failure::value(format!(
                    "expected string containing:\n  {:?}\n\nbut got:\n  {:?}",
                    needle, self.value
                ))
            },
        );
        self
    }

    pub fn not_contains(&self, needle: &str) -> &Self {
        self.chain.check(
            || !self.value.contains(needle),
            || {
                Failure::value(format!(
                    "expected string not containing:\n  {:?}\n\nbut got:\n  {:?}",
                    needle, self.value
                ))
            },
        );
        self
    }

    /// Asserts the string matches the regular expression `pattern`. An
    /// invalid pattern fails the chain as well.
    pub fn matches(&self, pattern: &str) -> &Self {
        if self.chain.is_failed() {
            return self;
        }
        match Regex::new(pattern) {
            Ok(re) => self.chain.check(
                || re.is_match(&self.value),
                || {
                    Failure::value(format!(
                        "expected string matching:\n  {}\n\nbut got:\n  {:?}",
                        pattern, self.value
                    ))
                },
            ),
            Err(e) => self
                .chain
                .fail(Failure::value(format!("invalid regular expression {:?}: {}", pattern, e))),
        }
        self
    }

    /// Length in characters.
    pub fn length(&self, expected: usize) -> &Self {
        let actual = self.value.chars().count();
        self.chain.check(
            || actual == expected,
            || Failure::value(mismatch("string length", expected, actual)),
        );
        self
    }
}

fn mismatch(what: &str, expected: impl std::fmt::Debug, actual: impl std::fmt::Debug) -> String {
    format!(
        "expected {} equal to:\n  {:?}\n\nbut got:\n  {:?}",
        what, expected, actual
    )
}
