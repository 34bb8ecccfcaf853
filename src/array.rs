// src/array.rs
// Assertions over a JSON array

use serde::Serialize;
use serde_json::Value as Json;

use crate::chain::Chain;
use crate::failure::Failure;
use crate::value::{canonical, mismatch, Value};

#[derive(Debug, Clone)]
pub struct Array {
    chain: Chain,
    items: Vec<Json>,
}

impl Array {
    pub fn new(chain: Chain, items: Vec<Json>) -> Self {
        Self { chain, items }
    }

    pub fn placeholder(chain: Chain) -> Self {
        Self::new(chain, Vec::new())
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn raw(&self) -> &[Json] {
        &self.items
    }

    pub fn empty(&self) -> &Self {
        self.length(0)
    }

    pub fn not_empty(&self) -> &Self {
        self.chain
            .check(|| !self.items.is_empty(), || Failure::value("expected non-empty array"));
        self
    }

    pub fn length(&self, expected: usize) -> &Self {
        self.chain.check(
            || self.items.len() == expected,
            || {
                Failure::value(format!(
                    "expected array of length {}, but got {}",
                    expected,
                    self.items.len()
                ))
            },
        );
        self
    }

    /// Element at `index`; out of bounds fails the chain.
    pub fn element(&self, index: usize) -> Value {
        if self.chain.is_failed() {
            return Value::placeholder(self.chain.clone());
        }
        match self.items.get(index) {
            Some(item) => Value::new(self.chain.clone(), item.clone()),
            None => {
                self.chain.fail(Failure::value(format!(
                    "array index {} out of bounds (length {})",
                    index,
                    self.items.len()
                )));
                Value::placeholder(self.chain.clone())
            }
        }
    }

    pub fn contains(&self, expected: impl Serialize) -> &Self {
        if let Some(expected) = canonical(&self.chain, expected) {
            self.chain.check(
                || self.items.contains(&expected),
                || Failure::value(format!("expected array containing:\n  {}", expected)),
            );
        }
        self
    }

    pub fn not_contains(&self, unexpected: impl Serialize) -> &Self {
        if let Some(unexpected) = canonical(&self.chain, unexpected) {
            self.chain.check(
                || !self.items.contains(&unexpected),
                || Failure::value(format!("expected array not containing:\n  {}", unexpected)),
            );
        }
        self
    }

    pub fn equal(&self, expected: impl Serialize) -> &Self {
        if let Some(expected) = canonical(&self.chain, expected) {
            let actual = Json::Array(self.items.clone());
            self.chain.check(
                || actual == expected,
                || Failure::value(mismatch(&expected, Some(&actual))),
            );
        }
        self
    }
}
