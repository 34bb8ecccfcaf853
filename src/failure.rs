// src/failure.rs
// Failure taxonomy reported through a chain

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    StatusMismatch,
    ContentAbsenceViolation,
    ContentTypeMismatch,
    UnsupportedCharset,
    DecodeFailure,
    BodyReadFailure,
    ValueMismatch,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::StatusMismatch => "status mismatch",
            FailureKind::ContentAbsenceViolation => "unexpected content",
            FailureKind::ContentTypeMismatch => "content type mismatch",
            FailureKind::UnsupportedCharset => "unsupported charset",
            FailureKind::DecodeFailure => "decode failure",
            FailureKind::BodyReadFailure => "body read failure",
            FailureKind::ValueMismatch => "value mismatch",
        };
        f.write_str(label)
    }
}

/// A single assertion failure: what kind of check broke and a readable
/// description of actual vs. expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Builds the usual "expected ... but got ..." message.
    pub fn mismatch(
        kind: FailureKind,
        what: &str,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::new(
            kind,
            format!(
                "expected {} equal to:\n  {}\n\nbut got:\n  {}",
                what, expected, actual
            ),
        )
    }

    pub fn value(message: impl Into<String>) -> Self {
        Self::new(FailureKind::ValueMismatch, message)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Shortens a body for inclusion in a failure message.
pub(crate) fn preview(bytes: &[u8], limit: usize) -> String {
    if bytes.len() <= limit {
        return format!("{:?}", String::from_utf8_lossy(bytes));
    }
    format!(
        "{:?}... ({} more bytes)",
        String::from_utf8_lossy(&bytes[..limit]),
        bytes.len() - limit
    )
}
