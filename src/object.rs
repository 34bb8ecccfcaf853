// src/object.rs
// Assertions over a JSON object

use serde::Serialize;
use serde_json::{Map, Value as Json};

use crate::array::Array;
use crate::chain::Chain;
use crate::failure::Failure;
use crate::value::{canonical, mismatch, Value};

#[derive(Debug, Clone)]
pub struct Object {
    chain: Chain,
    map: Map<String, Json>,
}

impl Object {
    pub fn new(chain: Chain, map: Map<String, Json>) -> Self {
        Self { chain, map }
    }

    pub fn placeholder(chain: Chain) -> Self {
        Self::new(chain, Map::new())
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn raw(&self) -> &Map<String, Json> {
        &self.map
    }

    pub fn empty(&self) -> &Self {
        self.chain.check(
            || self.map.is_empty(),
            || Failure::value(format!("expected empty object, but got {} keys", self.map.len())),
        );
        self
    }

    pub fn not_empty(&self) -> &Self {
        self.chain
            .check(|| !self.map.is_empty(), || Failure::value("expected non-empty object"));
        self
    }

    pub fn keys(&self) -> Array {
        let keys = self.map.keys().cloned().map(Json::String).collect();
        Array::new(self.chain.clone(), keys)
    }

    pub fn contains_key(&self, key: &str) -> &Self {
        self.chain.check(
            || self.map.contains_key(key),
            || Failure::value(format!("expected object containing key {:?}", key)),
        );
        self
    }

    pub fn not_contains_key(&self, key: &str) -> &Self {
        self.chain.check(
            || !self.map.contains_key(key),
            || Failure::value(format!("expected object not containing key {:?}", key)),
        );
        self
    }

    /// Value under `key`; a missing key fails the chain.
    pub fn value(&self, key: &str) -> Value {
        if self.chain.is_failed() {
            return Value::placeholder(self.chain.clone());
        }
        match self.map.get(key) {
            Some(value) => Value::new(self.chain.clone(), value.clone()),
            None => {
                self.chain
                    .fail(Failure::value(format!("expected object containing key {:?}", key)));
                Value::placeholder(self.chain.clone())
            }
        }
    }

    pub fn equal(&self, expected: impl Serialize) -> &Self {
        if let Some(expected) = canonical(&self.chain, expected) {
            let actual = Json::Object(self.map.clone());
            self.chain.check(
                || actual == expected,
                || Failure::value(mismatch(&expected, Some(&actual))),
            );
        }
        self
    }
}
