// src/response.rs
// Fluent assertions over one received HTTP response

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::StatusCode;
use std::cell::OnceCell;
use std::io::Read;
use std::rc::Rc;

use crate::body::Body;
use crate::chain::Chain;
use crate::config::default_body_preview;
use crate::content_type::{decode_text, ContentType};
use crate::failure::{preview, Failure, FailureKind};
use crate::headers::{first_value, Headers};
use crate::raw::RawResponse;
use crate::reporter::Reporter;
use crate::string::StringAssert;
use crate::value::Value;

/// Entry point for asserting on a response.
///
/// Every method either succeeds or fails the response's [`Chain`]; nothing
/// returns `Result` and nothing panics (unless the reporter does). Methods
/// that hand out a further assertion object return a placeholder over the
/// same, failed chain when they cannot produce real data, so a whole chain of
/// calls can be written without intermediate checks:
///
/// ```ignore
/// response.status(StatusCode::OK);
/// response.json().object().value("name").string().equal("hakiki");
/// ```
///
/// All objects derived from one response share its chain: the first failure
/// anywhere is reported once and the rest of the chain becomes a no-op.
#[derive(Debug)]
pub struct Response {
    chain: Chain,
    raw: RawResponse,
    body: OnceCell<Bytes>,
    preview_limit: usize,
}

impl Response {
    pub fn new(reporter: impl Reporter + 'static, raw: RawResponse) -> Self {
        Self::with_chain(Chain::new(Rc::new(reporter)), raw)
    }

    /// Wraps `raw` using an existing chain, which may already be failed.
    pub fn with_chain(chain: Chain, raw: RawResponse) -> Self {
        Self {
            chain,
            raw,
            body: OnceCell::new(),
            preview_limit: default_body_preview(),
        }
    }

    /// Maximum number of body bytes quoted in failure messages.
    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    pub fn status(&self, expected: StatusCode) -> &Self {
        let actual = self.raw.status();
        self.chain.check(
            || actual == expected,
            || Failure::mismatch(FailureKind::StatusMismatch, "status", expected, actual),
        );
        self
    }

    pub fn headers(&self) -> Headers {
        if self.chain.is_failed() {
            return Headers::placeholder(self.chain.clone());
        }
        Headers::new(self.chain.clone(), self.raw.headers().clone())
    }

    /// First value of header `name`, or an empty string when the header is
    /// missing. Lookup is case-insensitive.
    pub fn header(&self, name: &str) -> StringAssert {
        if self.chain.is_failed() {
            return StringAssert::placeholder(self.chain.clone());
        }
        let value = first_value(self.raw.headers(), name).unwrap_or_default();
        StringAssert::new(self.chain.clone(), value)
    }

    pub fn body(&self) -> Body {
        if self.chain.is_failed() {
            return Body::placeholder(self.chain.clone());
        }
        let bytes = self.read_body().clone();
        Body::new(self.chain.clone(), bytes).with_preview_limit(self.preview_limit)
    }

    /// Asserts an empty body and a missing or empty `Content-Type` header.
    pub fn no_content(&self) -> &Self {
        if self.chain.is_failed() {
            return self;
        }

        let content_type = self.content_type_header();
        let body = self.read_body();
        if self.chain.is_failed() {
            return self;
        }

        let mut problems = Vec::new();
        if !content_type.is_empty() {
            problems.push(format!(
                "expected missing or empty \"Content-Type\" header, but got:\n  {:?}",
                content_type
            ));
        }
        if !body.is_empty() {
            problems.push(format!(
                "expected empty body, but got:\n  {}",
                preview(body, self.preview_limit)
            ));
        }

        if !problems.is_empty() {
            self.chain.fail(Failure::new(
                FailureKind::ContentAbsenceViolation,
                problems.join("\n\n"),
            ));
        }
        self
    }

    /// Asserts the media type of the `Content-Type` header, ignoring any
    /// charset parameter. An empty `media_type` matches a missing, empty or
    /// unparsable header.
    pub fn content_type(&self, media_type: &str) -> &Self {
        self.check_content_type(media_type, None);
        self
    }

    /// Asserts media type and charset. The charset is compared ignoring ASCII
    /// case; an empty `charset` asserts that no charset parameter is present.
    pub fn content_type_charset(&self, media_type: &str, charset: &str) -> &Self {
        self.check_content_type(media_type, Some(charset));
        self
    }

    /// Body decoded as `text/plain` in the declared charset.
    pub fn text(&self) -> StringAssert {
        if !self.check_content_type(mime::TEXT_PLAIN.essence_str(), None) {
            return StringAssert::placeholder(self.chain.clone());
        }

        let content_type = ContentType::parse(&self.content_type_header());
        let body = self.read_body();
        if self.chain.is_failed() {
            return StringAssert::placeholder(self.chain.clone());
        }

        match decode_text(body, content_type.charset.as_deref()) {
            Ok(text) => StringAssert::new(self.chain.clone(), text),
            Err(failure) => {
                self.chain.fail(failure);
                StringAssert::placeholder(self.chain.clone())
            }
        }
    }

    /// Body decoded as an `application/json` document.
    pub fn json(&self) -> Value {
        if !self.check_content_type(mime::APPLICATION_JSON.essence_str(), None) {
            return Value::placeholder(self.chain.clone());
        }

        let content_type = ContentType::parse(&self.content_type_header());
        if !content_type.is_utf8_or_unset() {
            self.chain.fail(Failure::new(
                FailureKind::UnsupportedCharset,
                format!(
                    "expected \"Content-Type\" header with \"utf-8\" or empty charset, but got:\n  {:?}",
                    content_type.charset_or_empty()
                ),
            ));
            return Value::placeholder(self.chain.clone());
        }

        let body = self.read_body();
        if self.chain.is_failed() {
            return Value::placeholder(self.chain.clone());
        }

        let decoded = decode_text(body, None).and_then(|text| {
            serde_json::from_str::<serde_json::Value>(&text).map_err(|e| {
                Failure::new(
                    FailureKind::DecodeFailure,
                    format!(
                        "can't decode body as JSON: {}\n\nbody:\n  {}",
                        e,
                        preview(body, self.preview_limit)
                    ),
                )
            })
        });

        match decoded {
            Ok(json) => Value::new(self.chain.clone(), json),
            Err(failure) => {
                self.chain.fail(failure);
                Value::placeholder(self.chain.clone())
            }
        }
    }

    fn content_type_header(&self) -> String {
        first_value(self.raw.headers(), CONTENT_TYPE.as_str()).unwrap_or_default()
    }

    fn check_content_type(&self, expected_type: &str, expected_charset: Option<&str>) -> bool {
        if self.chain.is_failed() {
            return false;
        }

        let header = self.content_type_header();
        let content_type = ContentType::parse(&header);

        if content_type.media_type != expected_type {
            let actual = if content_type.media_type.is_empty() && !header.trim().is_empty() {
                format!("unparsable header {:?}", header)
            } else {
                format!("{:?}", content_type.media_type)
            };
            self.chain.fail(Failure::new(
                FailureKind::ContentTypeMismatch,
                format!(
                    "expected \"Content-Type\" header with {:?} media type,\nbut got {}",
                    expected_type, actual
                ),
            ));
            return false;
        }

        if let Some(expected_charset) = expected_charset {
            let actual_charset = content_type.charset_or_empty();
            if !actual_charset.eq_ignore_ascii_case(expected_charset) {
                self.chain.fail(Failure::new(
                    FailureKind::ContentTypeMismatch,
                    format!(
                        "expected \"Content-Type\" header with {:?} charset,\nbut got {:?}",
                        expected_charset, actual_charset
                    ),
                ));
                return false;
            }
        }

        true
    }

    /// Reads the body stream on first use and caches it. A missing body reads
    /// as empty; a read error fails the chain and caches an empty body.
    fn read_body(&self) -> &Bytes {
        self.body.get_or_init(|| {
            let Some(mut reader) = self.raw.take_body() else {
                return Bytes::new();
            };

            let mut buf = Vec::new();
            match reader.read_to_end(&mut buf) {
                Ok(n) => {
                    log::debug!("read {} body bytes", n);
                    Bytes::from(buf)
                }
                Err(e) => {
                    self.chain.fail(Failure::new(
                        FailureKind::BodyReadFailure,
                        format!("failed to read response body: {}", e),
                    ));
                    Bytes::new()
                }
            }
        })
    }
}
