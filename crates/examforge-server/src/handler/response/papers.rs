//! Paper analysis response types.

use examforge_core::{ExtractedText, QuestionTypeSet};
use serde::Serialize;

/// Summary of an uploaded exam paper.
#[must_use]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperAnalysis {
    /// File name the paper was uploaded under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Number of pages in the PDF.
    pub page_count: usize,
    /// Number of characters of extracted text.
    pub character_count: usize,
    /// Exam sections detected in the text, in fixed order.
    pub question_types: QuestionTypeSet,
    /// Reading passages found after the `A`–`D` marker lines.
    pub articles: Vec<String>,
}

impl PaperAnalysis {
    /// Summarizes extracted text.
    pub fn new(file_name: Option<String>, text: &ExtractedText) -> Self {
        Self {
            file_name,
            page_count: text.page_count(),
            character_count: text.char_count(),
            question_types: examforge_core::classify(text.as_str()),
            articles: examforge_core::split_articles(text.as_str()),
        }
    }
}
