//! # hakiki
//!
//! Fluent assertions for HTTP responses in test suites.
//!
//! A [`Response`] wraps one received response. Its assertions never return
//! errors: the first failure marks the response's [`Chain`] as failed and is
//! handed to a [`Reporter`] exactly once. Everything after that keeps working
//! on placeholder data, so a test reads as one straight sequence of checks.
//!
//! ```no_run
//! use hakiki::{Expect, PanicReporter};
//! use http::StatusCode;
//!
//! let raw = http::Response::builder()
//!     .status(StatusCode::OK)
//!     .header("Content-Type", "application/json")
//!     .body(r#"{"name": "hakiki"}"#)
//!     .unwrap();
//!
//! let resp = Expect::new(PanicReporter).response(raw);
//! resp.status(StatusCode::OK).content_type("application/json");
//! resp.json().object().value("name").string().equal("hakiki");
//! ```

mod array;
mod body;
mod chain;
mod config;
mod content_type;
mod expect;
mod failure;
mod headers;
mod object;
mod raw;
mod reporter;
mod response;
mod scalar;
mod string;
mod value;

pub use array::Array;
pub use body::Body;
pub use chain::Chain;
pub use config::{ColorChoice, Config, ConfigError, ConfigLoader, ReporterKind};
pub use content_type::ContentType;
pub use expect::Expect;
pub use failure::{Failure, FailureKind};
pub use headers::Headers;
pub use object::Object;
pub use raw::RawResponse;
pub use reporter::{ConsoleReporter, LogReporter, PanicReporter, RecordingReporter, Reporter};
pub use response::Response;
pub use scalar::{Boolean, Number};
pub use string::StringAssert;
pub use value::Value;
