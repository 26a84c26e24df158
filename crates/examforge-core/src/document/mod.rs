//! Uploaded documents and their extracted text.

mod articles;
mod extract;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

pub use self::articles::{MAX_ARTICLES, split_articles};
pub use self::extract::extract_text;

/// An uploaded PDF, alive for the duration of one request.
#[derive(Debug, Clone)]
pub struct RawDocument {
    file_name: Option<String>,
    content: Bytes,
}

impl RawDocument {
    /// Wraps uploaded bytes.
    pub fn new(content: impl Into<Bytes>) -> Self {
        Self {
            file_name: None,
            content: content.into(),
        }
    }

    /// Records the file name the client uploaded the document under.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Returns the uploaded file name, if the client sent one.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Returns the size of the upload in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the upload is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Plain text of every page of a document, in page order.
///
/// Pages are joined with a single `\n`; a page without extractable text is an
/// empty segment, so the number of segments always equals the page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    text: String,
    page_count: usize,
}

impl ExtractedText {
    /// Joins page texts in the given order.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut page_count = 0;

        for page in pages {
            if page_count > 0 {
                text.push('\n');
            }
            text.push_str(page.as_ref().trim_end_matches(['\n', '\r']));
            page_count += 1;
        }

        Self { text, page_count }
    }

    /// Returns the full text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of pages the text was assembled from.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns the length of the text in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Consumes the value, returning the text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for ExtractedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
