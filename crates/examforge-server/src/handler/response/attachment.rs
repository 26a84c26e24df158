//! Downloadable file responses.

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::handler::ErrorKind;

/// Characters allowed unescaped in an RFC 5987 `attr-char`.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// A file sent with `Content-Disposition: attachment`.
#[must_use]
#[derive(Debug, Clone)]
pub struct Attachment {
    file_name: String,
    content_type: &'static str,
    body: Bytes,
}

impl Attachment {
    /// Creates a new attachment.
    pub fn new(
        file_name: impl Into<String>,
        content_type: &'static str,
        body: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            body: body.into(),
        }
    }

    /// Returns the file name offered to the client.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the `Content-Disposition` value for this attachment.
    pub fn content_disposition(&self) -> String {
        format!(
            "attachment; filename*=UTF-8''{}",
            utf8_percent_encode(&self.file_name, ATTR_CHAR)
        )
    }
}

impl IntoResponse for Attachment {
    fn into_response(self) -> Response {
        let Ok(disposition) = HeaderValue::from_str(&self.content_disposition()) else {
            return ErrorKind::InternalServerError
                .with_message("Invalid attachment file name")
                .into_response();
        };

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        headers.insert(header::CONTENT_DISPOSITION, disposition);

        (StatusCode::OK, headers, self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_names_are_percent_encoded() {
        let attachment = Attachment::new("A篇_二次开发练习.docx", "application/octet-stream", "");
        assert_eq!(
            attachment.content_disposition(),
            "attachment; filename*=UTF-8''A%E7%AF%87_%E4%BA%8C%E6%AC%A1%E5%BC%80%E5%8F%91%E7%BB%83%E4%B9%A0.docx"
        );
    }

    #[test]
    fn spaces_and_quotes_are_escaped() {
        let attachment = Attachment::new("my \"paper\".txt", "text/plain", "");
        assert_eq!(
            attachment.content_disposition(),
            "attachment; filename*=UTF-8''my%20%22paper%22.txt"
        );
    }

    #[test]
    fn response_carries_headers() {
        let response = Attachment::new("a.txt", "text/plain; charset=utf-8", "hi").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename*=UTF-8''a.txt"
        );
    }
}
