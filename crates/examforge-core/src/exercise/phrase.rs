//! Chinese/English phrase translation pairs.
//!
//! Fixed example data: the pairs do not depend on the paper.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const PAIRS: [(&str, &str); 5] = [
    ("不仅...而且...", "not only...but also..."),
    ("事实上", "in fact"),
    ("重新审视", "revisit the question of..."),
    ("纯粹的乐趣", "for pure pleasure, not purpose"),
    ("充实的生活", "a life well lived"),
];

/// Two parallel columns of phrases.
///
/// Entries at the same index translate each other. The columns can arrive
/// from clients with different lengths, so callers rendering them go through
/// [`PhraseTranslation::pairs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseTranslation {
    /// Chinese column.
    pub chinese: Vec<String>,
    /// English column.
    pub english: Vec<String>,
}

impl PhraseTranslation {
    /// Zips the columns into rows.
    ///
    /// Fails with a payload shape error when the columns differ in length.
    pub fn pairs(&self) -> Result<Vec<(&str, &str)>> {
        if self.chinese.len() != self.english.len() {
            return Err(Error::payload_shape().with_message(format!(
                "phrase translation has {} chinese entries but {} english entries",
                self.chinese.len(),
                self.english.len()
            )));
        }

        Ok(self
            .chinese
            .iter()
            .zip(&self.english)
            .map(|(cn, en)| (cn.as_str(), en.as_str()))
            .collect())
    }
}

/// Returns the fixed phrase pairs.
pub fn generate() -> PhraseTranslation {
    let (chinese, english) = PAIRS
        .iter()
        .map(|(cn, en)| ((*cn).to_owned(), (*en).to_owned()))
        .unzip();
    PhraseTranslation { chinese, english }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn generated_columns_line_up() {
        let phrases = generate();
        let pairs = phrases.pairs().unwrap();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[1], ("事实上", "in fact"));
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let phrases = PhraseTranslation {
            chinese: vec!["事实上".into(), "重新审视".into()],
            english: vec!["in fact".into()],
        };
        let err = phrases.pairs().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PayloadShape);
    }
}
