// src/raw.rs
// The received HTTP response handed over by the transport

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::cell::RefCell;
use std::fmt;
use std::io::{Cursor, Read};

/// Status, headers and a single-use body stream of one received response.
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: RefCell<Option<Box<dyn Read>>>,
}

impl RawResponse {
    /// `body` is `None` when the transport produced no body at all; this is
    /// treated the same as an empty body.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Option<Box<dyn Read>>) -> Self {
        Self {
            status,
            headers,
            body: RefCell::new(body),
        }
    }

    pub fn with_reader(status: StatusCode, headers: HeaderMap, reader: impl Read + 'static) -> Self {
        Self::new(status, headers, Some(Box::new(reader)))
    }

    pub fn with_bytes(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self::with_reader(status, headers, Cursor::new(body.into()))
    }

    /// Buffers a response received with reqwest.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Self::with_bytes(status, headers, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// True until the body stream has been handed out.
    pub fn has_body(&self) -> bool {
        self.body.borrow().is_some()
    }

    /// Hands out the body stream. Later calls return `None`.
    pub(crate) fn take_body(&self) -> Option<Box<dyn Read>> {
        self.body.borrow_mut().take()
    }
}

impl<B: Into<Bytes>> From<http::Response<B>> for RawResponse {
    fn from(response: http::Response<B>) -> Self {
        let (parts, body) = response.into_parts();
        Self::with_bytes(parts.status, parts.headers, body)
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("has_body", &self.has_body())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::CONTENT_TYPE;

    #[test]
    fn test_from_http_response() {
        let response = http::Response::builder()
            .status(StatusCode::CREATED)
            .header(CONTENT_TYPE, "text/plain")
            .body("hello")
            .unwrap();

        let raw = RawResponse::from(response);
        assert_eq!(raw.status(), StatusCode::CREATED);
        assert_eq!(raw.headers()[CONTENT_TYPE], "text/plain");
        assert!(raw.has_body());
    }

    #[test]
    fn test_take_body_once() {
        let raw = RawResponse::with_bytes(StatusCode::OK, HeaderMap::new(), "body");

        let mut reader = raw.take_body().unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "body");

        assert!(!raw.has_body());
        assert!(raw.take_body().is_none());
    }

    #[test]
    fn test_missing_body() {
        let raw = RawResponse::new(StatusCode::NO_CONTENT, HeaderMap::new(), None);
        assert!(!raw.has_body());
        assert!(format!("{:?}", raw).contains("has_body: false"));
    }
}
