// src/body.rs
// Assertions over the raw body bytes

use bytes::Bytes;

use crate::chain::Chain;
use crate::config::default_body_preview;
use crate::failure::{preview, Failure};

#[derive(Debug, Clone)]
pub struct Body {
    chain: Chain,
    bytes: Bytes,
    preview_limit: usize,
}

impl Body {
    pub fn new(chain: Chain, bytes: Bytes) -> Self {
        Self {
            chain,
            bytes,
            preview_limit: default_body_preview(),
        }
    }

    /// Maximum number of body bytes quoted in failure messages.
    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    pub fn placeholder(chain: Chain) -> Self {
        Self::new(chain, Bytes::new())
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn raw(&self) -> &Bytes {
        &self.bytes
    }

    pub fn empty(&self) -> &Self {
        self.chain.check(
            || self.bytes.is_empty(),
            || {
                Failure::value(format!(
                    "expected empty body, but got:\n  {}",
                    preview(&self.bytes, self.preview_limit)
                ))
            },
        );
        self
    }

    pub fn not_empty(&self) -> &Self {
        self.chain
            .check(|| !self.bytes.is_empty(), || Failure::value("expected non-empty body"));
        self
    }

    pub fn equal(&self, expected: impl AsRef<[u8]>) -> &Self {
        let expected = expected.as_ref();
        self.chain.check(
            || self.bytes.as_ref() == expected,
            || {
                Failure::value(format!(
                    "expected body equal to:\n  {}\n\nbut got:\n  {}",
                    preview(expected, self.preview_limit),
                    preview(&self.bytes, self.preview_limit)
                ))
            },
        );
        self
    }

    pub fn length(&self, expected: usize) -> &Self {
        self.chain.check(
            || self.bytes.len() == expected,
            || {
                Failure::value(format!(
                    "expected body length {}, but got {}",
                    expected,
                    self.bytes.len()
                ))
            },
        );
        self
    }

    pub fn contains(&self, needle: impl AsRef<[u8]>) -> &Self {
        let needle = needle.as_ref();
        self.chain.check(
            || needle.is_empty() || self.bytes.windows(needle.len()).any(|w| w == needle),
            || {
                Failure::value(format!(
                    "expected body containing:\n  {}\n\nbut got:\n  {}",
                    preview(needle, self.preview_limit),
                    preview(&self.bytes, self.preview_limit)
                ))
            },
        );
        self
    }
}
