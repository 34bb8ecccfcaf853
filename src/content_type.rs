// src/content_type.rs
// Content-Type parsing and charset-aware body decoding

use mime::Mime;

use crate::failure::{Failure, FailureKind};

/// Media type and charset taken from a `Content-Type` header value.
///
/// Whitespace around each `;` is allowed. A value that does not follow
/// `type/subtype *( ";" param )` (including the empty string) yields an empty
/// media type and no charset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentType {
    pub media_type: String,
    pub charset: Option<String>,
}

impl ContentType {
    pub fn parse(value: &str) -> Self {
        let normalized = value
            .split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        let mime = match normalized.parse::<Mime>() {
            Ok(mime) => mime,
            Err(_) => return Self::default(),
        };

        // Keep the header's own spelling; mime lowercases type and subtype.
        let media_type = value.split(';').next().unwrap_or("").trim().to_string();
        let charset = mime
            .get_param(mime::CHARSET)
            .map(|name| name.as_str().to_string())
            .filter(|charset| !charset.is_empty());

        Self {
            media_type,
            charset,
        }
    }

    pub fn charset_or_empty(&self) -> &str {
        self.charset.as_deref().unwrap_or("")
    }

    pub fn is_utf8_or_unset(&self) -> bool {
        match self.charset.as_deref() {
            None => true,
            Some(charset) => is_utf8(charset),
        }
    }
}

fn is_utf8(charset: &str) -> bool {
    charset.eq_ignore_ascii_case("utf-8") || charset.eq_ignore_ascii_case("utf8")
}

/// Decodes `bytes` in the given charset. No charset means UTF-8.
pub(crate) fn decode_text(bytes: &[u8], charset: Option<&str>) -> Result<String, Failure> {
    let charset = charset.unwrap_or("utf-8");

    if is_utf8(charset) {
        return String::from_utf8(bytes.to_vec()).map_err(|e| {
            Failure::new(
                FailureKind::DecodeFailure,
                format!("can't decode body as utf-8 text: {}", e),
            )
        });
    }

    if charset.eq_ignore_ascii_case("us-ascii") || charset.eq_ignore_ascii_case("ascii") {
        if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
            return Err(Failure::new(
                FailureKind::DecodeFailure,
                format!("can't decode body as us-ascii: non-ascii byte at offset {}", pos),
            ));
        }
        return Ok(bytes.iter().map(|&b| b as char).collect());
    }

    if charset.eq_ignore_ascii_case("iso-8859-1") || charset.eq_ignore_ascii_case("latin1") {
        return Ok(bytes.iter().map(|&b| b as char).collect());
    }

    Err(Failure::new(
        FailureKind::UnsupportedCharset,
        format!("unsupported charset {:?} in \"Content-Type\" header", charset),
    ))
}
