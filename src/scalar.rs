// src/scalar.rs
// Assertions over JSON numbers and booleans

use crate::chain::Chain;
use crate::failure::Failure;

#[derive(Debug, Clone)]
pub struct Number {
    chain: Chain,
    value: f64,
}

impl Number {
    pub fn new(chain: Chain, value: f64) -> Self {
        Self { chain, value }
    }

    pub fn placeholder(chain: Chain) -> Self {
        Self::new(chain, 0.0)
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn raw(&self) -> f64 {
        self.value
    }

    pub fn equal(&self, expected: f64) -> &Self {
        self.compare("equal to", expected, |a, b| a == b)
    }

    pub fn not_equal(&self, unexpected: f64) -> &Self {
        self.compare("not equal to", unexpected, |a, b| a != b)
    }

    pub fn gt(&self, bound: f64) -> &Self {
        self.compare("greater than", bound, |a, b| a > b)
    }

    pub fn ge(&self, bound: f64) -> &Self {
        self.compare("greater than or equal to", bound, |a, b| a >= b)
    }

    pub fn lt(&self, bound: f64) -> &Self {
        self.compare("less than", bound, |a, b| a < b)
    }

    pub fn le(&self, bound: f64) -> &Self {
        self.compare("less than or equal to", bound, |a, b| a <= b)
    }

    /// Inclusive on both ends.
    pub fn in_range(&self, min: f64, max: f64) -> &Self {
        self.chain.check(
            || self.value >= min && self.value <= max,
            || {
                Failure::value(format!(
                    "expected number in range [{}, {}], but got {}",
                    min, max, self.value
                ))
            },
        );
        self
    }

    fn compare(&self, relation: &str, other: f64, ok: impl FnOnce(f64, f64) -> bool) -> &Self {
        self.chain.check(
            || ok(self.value, other),
            || {
                Failure::value(format!(
                    "expected number {} {}, but got {}",
                    relation, other, self.value
                ))
            },
        );
        self
    }
}

#[derive(Debug, Clone)]
pub struct Boolean {
    chain: Chain,
    value: bool,
}

impl Boolean {
    pub fn new(chain: Chain, value: bool) -> Self {
        Self { chain, value }
    }

    pub fn placeholder(chain: Chain) -> Self {
        Self::new(chain, false)
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn raw(&self) -> bool {
        self.value
    }

    pub fn equal(&self, expected: bool) -> &Self {
        self.chain.check(
            || self.value == expected,
            || Failure::value(format!("expected {}, but got {}", expected, self.value)),
        );
        self
    }

    pub fn is_true(&self) -> &Self {
        self.equal(true)
    }

    pub fn is_false(&self) -> &Self {
        self.equal(false)
    }
}
