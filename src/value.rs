// src/value.rs
// Assertions over a decoded JSON value

use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::Value as Json;

use crate::array::Array;
use crate::chain::Chain;
use crate::failure::Failure;
use crate::object::Object;
use crate::scalar::{Boolean, Number};
use crate::string::StringAssert;

/// A JSON document or a part of one.
///
/// `raw()` is `None` only for placeholders: a JSON `null` decodes to
/// `Some(Json::Null)`.
#[derive(Debug, Clone)]
pub struct Value {
    chain: Chain,
    value: Option<Json>,
}

impl Value {
    pub fn new(chain: Chain, value: Json) -> Self {
        Self {
            chain,
            value: Some(value),
        }
    }

    pub fn placeholder(chain: Chain) -> Self {
        Self { chain, value: None }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn raw(&self) -> Option<&Json> {
        self.value.as_ref()
    }

    pub fn null(&self) -> &Self {
        self.chain.check(
            || matches!(self.value, Some(Json::Null)),
            || Failure::value(format!("expected null, but got {}", describe(self.raw()))),
        );
        self
    }

    pub fn not_null(&self) -> &Self {
        self.chain.check(
            || matches!(self.value, Some(ref v) if !v.is_null()),
            || Failure::value(format!("expected non-null value, but got {}", describe(self.raw()))),
        );
        self
    }

    pub fn equal(&self, expected: impl Serialize) -> &Self {
        if let Some(expected) = canonical(&self.chain, expected) {
            self.chain.check(
                || self.value.as_ref() == Some(&expected),
                || Failure::value(mismatch(&expected, self.raw())),
            );
        }
        self
    }

    pub fn not_equal(&self, unexpected: impl Serialize) -> &Self {
        if let Some(unexpected) = canonical(&self.chain, unexpected) {
            self.chain.check(
                || self.value.as_ref() != Some(&unexpected),
                || Failure::value(format!("expected value not equal to:\n  {}", unexpected)),
            );
        }
        self
    }

    pub fn object(&self) -> Object {
        match self.typed("object", |v| v.as_object().cloned()) {
            Some(map) => Object::new(self.chain.clone(), map),
            None => Object::placeholder(self.chain.clone()),
        }
    }

    pub fn array(&self) -> Array {
        match self.typed("array", |v| v.as_array().cloned()) {
            Some(items) => Array::new(self.chain.clone(), items),
            None => Array::placeholder(self.chain.clone()),
        }
    }

    pub fn string(&self) -> StringAssert {
        match self.typed("string", |v| v.as_str().map(str::to_string)) {
            Some(s) => StringAssert::new(self.chain.clone(), s),
            None => StringAssert::placeholder(self.chain.clone()),
        }
    }

    pub fn number(&self) -> Number {
        match self.typed("number", Json::as_f64) {
            Some(n) => Number::new(self.chain.clone(), n),
            None => Number::placeholder(self.chain.clone()),
        }
    }

    pub fn boolean(&self) -> Boolean {
        match self.typed("boolean", Json::as_bool) {
            Some(b) => Boolean::new(self.chain.clone(), b),
            None => Boolean::placeholder(self.chain.clone()),
        }
    }

    /// Validates the value against a JSON Schema document.
    pub fn schema(&self, schema: &Json) -> &Self {
        if self.chain.is_failed() {
            return self;
        }

        let compiled = match JSONSchema::compile(schema) {
            Ok(compiled) => compiled,
            Err(e) => {
                self.chain
                    .fail(Failure::value(format!("invalid JSON schema: {}", e)));
                return self;
            }
        };

        let null = Json::Null;
        let instance = self.value.as_ref().unwrap_or(&null);
        let reasons: Vec<String> = match compiled.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|e| format!("  {}", e))
                .collect(),
        };

        if !reasons.is_empty() {
            self.chain.fail(Failure::value(format!(
                "expected value matching schema, but validation failed:\n{}",
                reasons.join("\n")
            )));
        }
        self
    }

    /// Extracts typed data when the chain is OK and the value has the wanted
    /// JSON type; fails the chain otherwise.
    fn typed<T>(&self, wanted: &str, extract: impl FnOnce(&Json) -> Option<T>) -> Option<T> {
        if self.chain.is_failed() {
            return None;
        }
        let extracted = self.value.as_ref().and_then(extract);
        if extracted.is_none() {
            self.chain.fail(Failure::value(format!(
                "expected {}, but got {}",
                wanted,
                describe(self.raw())
            )));
        }
        extracted
    }
}

/// Converts `value` to JSON for comparison, failing the chain if it can't be.
pub(crate) fn canonical(chain: &Chain, value: impl Serialize) -> Option<Json> {
    if chain.is_failed() {
        return None;
    }
    match serde_json::to_value(value) {
        Ok(json) => Some(json),
        Err(e) => {
            chain.fail(Failure::value(format!(
                "expected value can't be converted to JSON: {}",
                e
            )));
            None
        }
    }
}

pub(crate) fn mismatch(expected: &Json, actual: Option<&Json>) -> String {
    format!(
        "expected value equal to:\n  {}\n\nbut got:\n  {}",
        expected,
        actual.map(Json::to_string).unwrap_or_else(|| "<absent>".to_string())
    )
}

pub(crate) fn describe(value: Option<&Json>) -> String {
    match value {
        None => "absent value".to_string(),
        Some(Json::Null) => "null".to_string(),
        Some(Json::Bool(b)) => format!("boolean {}", b),
        Some(Json::Number(n)) => format!("number {}", n),
        Some(Json::String(s)) => format!("string {:?}", s),
        Some(Json::Array(items)) => format!("array of {} elements", items.len()),
        Some(Json::Object(map)) => format!("object with {} keys", map.len()),
    }
}
