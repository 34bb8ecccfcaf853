//! Response fixtures
//!
//! Builders for in-memory responses wired to a recording reporter, so tests
//! can inspect both the chain state and what was reported.

use std::sync::Once;

use hakiki::{RawResponse, RecordingReporter, Response};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::StatusCode;

static LOGGING: Once = Once::new();

/// Route `log` output through env_logger in test mode
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Builder for a raw response and the response wrapping it
pub struct ResponseFixture {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<&'static str>,
}

impl ResponseFixture {
    /// Status 200, no headers, no body at all
    pub fn new() -> Self {
        ResponseFixture {
            status: StatusCode::OK,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn body(mut self, body: &'static str) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        for &(name, value) in &self.headers {
            map.append(
                HeaderName::from_bytes(name.as_bytes()).expect("valid header name"),
                HeaderValue::from_static(value),
            );
        }
        map
    }

    pub fn raw(&self) -> RawResponse {
        let headers = self.header_map();
        match self.body {
            Some(body) => RawResponse::with_bytes(self.status, headers, body),
            None => RawResponse::new(self.status, headers, None),
        }
    }

    /// Build the response together with the reporter it reports to
    pub fn build(&self) -> (Response, RecordingReporter) {
        init_logging();
        let reporter = RecordingReporter::new();
        let response = Response::new(reporter.clone(), self.raw());
        (response, reporter)
    }
}

impl Default for ResponseFixture {
    fn default() -> Self {
        Self::new()
    }
}
