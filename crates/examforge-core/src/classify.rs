//! Exam section detection from keyword markers.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// A section of an exam paper.
///
/// Variants are declared in the order the labels are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, AsRefStr, EnumIter)]
pub enum QuestionType {
    /// Reading comprehension.
    #[serde(rename = "阅读理解")]
    #[strum(serialize = "阅读理解")]
    ReadingComprehension,
    /// Seven-option gap filling.
    #[serde(rename = "七选五")]
    #[strum(serialize = "七选五")]
    SevenChooseFive,
    /// Cloze test.
    #[serde(rename = "完形填空")]
    #[strum(serialize = "完形填空")]
    Cloze,
    /// Grammar gap filling.
    #[serde(rename = "语法填空")]
    #[strum(serialize = "语法填空")]
    GrammarFill,
    /// Written expression.
    #[serde(rename = "书面表达")]
    #[strum(serialize = "书面表达")]
    Writing,
    /// Listening.
    #[serde(rename = "听力")]
    #[strum(serialize = "听力")]
    Listening,
}

impl QuestionType {
    /// Returns the Chinese label of this section.
    pub fn label(self) -> &'static str {
        match self {
            Self::ReadingComprehension => "阅读理解",
            Self::SevenChooseFive => "七选五",
            Self::Cloze => "完形填空",
            Self::GrammarFill => "语法填空",
            Self::Writing => "书面表达",
            Self::Listening => "听力",
        }
    }

    /// Marker phrases that identify this section. Matching is case-insensitive.
    fn markers(self) -> &'static [&'static str] {
        match self {
            Self::ReadingComprehension => &["阅读理解", "reading comprehension"],
            Self::SevenChooseFive => &["七选五"],
            Self::Cloze => &["完形填空", "cloze"],
            Self::GrammarFill => &["语法填空", "grammar"],
            Self::Writing => &["书面表达", "writing"],
            Self::Listening => &["听力", "listening"],
        }
    }

    fn matches(self, lowered: &str) -> bool {
        self.markers().iter().any(|marker| lowered.contains(marker))
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The sections detected in a paper, in declaration order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionTypeSet(Vec<QuestionType>);

impl QuestionTypeSet {
    /// Reported when no marker matches.
    pub const FALLBACK: [QuestionType; 4] = [
        QuestionType::ReadingComprehension,
        QuestionType::SevenChooseFive,
        QuestionType::Cloze,
        QuestionType::GrammarFill,
    ];

    /// Returns the fallback set.
    pub fn fallback() -> Self {
        Self(Self::FALLBACK.to_vec())
    }

    /// Returns the detected sections.
    pub fn as_slice(&self) -> &[QuestionType] {
        &self.0
    }

    /// Returns `true` if the section was detected.
    pub fn contains(&self, question_type: QuestionType) -> bool {
        self.0.contains(&question_type)
    }

    /// Returns the number of detected sections.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the labels in order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(|t| t.label()).collect()
    }
}

impl<'a> IntoIterator for &'a QuestionTypeSet {
    type Item = &'a QuestionType;
    type IntoIter = std::slice::Iter<'a, QuestionType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Detects which exam sections a text contains.
pub fn classify(text: &str) -> QuestionTypeSet {
    let lowered = text.to_lowercase();
    let detected: Vec<_> = QuestionType::iter()
        .filter(|question_type| question_type.matches(&lowered))
        .collect();

    if detected.is_empty() {
        QuestionTypeSet::fallback()
    } else {
        QuestionTypeSet(detected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_text_falls_back() {
        let set = classify("nothing to see here");
        assert_eq!(set.labels(), vec!["阅读理解", "七选五", "完形填空", "语法填空"]);
    }

    #[test]
    fn empty_text_falls_back() {
        assert_eq!(classify("").as_slice(), &QuestionTypeSet::FALLBACK);
    }

    #[test]
    fn english_markers_are_case_insensitive() {
        let set = classify("Part II  LISTENING\nPart III Writing");
        assert_eq!(set.as_slice(), &[QuestionType::Writing, QuestionType::Listening]);
    }

    #[test]
    fn labels_follow_declaration_order() {
        let set = classify("听力 ... 完形填空 ... 阅读理解 ... 七选五");
        assert_eq!(set.labels(), vec!["阅读理解", "七选五", "完形填空", "听力"]);
    }

    #[test]
    fn grammar_marker_detects_grammar_fill() {
        let set = classify("Grammar and vocabulary");
        assert_eq!(set.as_slice(), &[QuestionType::GrammarFill]);
    }

    #[test]
    fn serializes_as_chinese_labels() {
        let json = serde_json::to_string(&classify("cloze")).unwrap();
        assert_eq!(json, r#"["完形填空"]"#);
    }
}
