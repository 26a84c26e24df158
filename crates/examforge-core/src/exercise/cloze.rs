//! Connective cloze items.

use serde::{Deserialize, Serialize};

/// Connectives offered as cloze answers.
pub const CONNECTIVES: [&str; 10] = [
    "however",
    "therefore",
    "although",
    "furthermore",
    "moreover",
    "consequently",
    "nevertheless",
    "accordingly",
    "meanwhile",
    "otherwise",
];

/// Number of items in one cloze exercise.
pub const CLOZE_ITEMS: usize = 8;

/// One numbered blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClozeEntry {
    /// Item number, starting at `"1"`.
    pub number: String,
    /// Expected answer.
    pub word: String,
    /// Prompt shown to the student.
    pub clue: String,
}

/// Cloze exercise, in item order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cloze(pub Vec<ClozeEntry>);

/// Builds the cloze items from the first connectives.
pub fn generate() -> Cloze {
    Cloze(
        CONNECTIVES
            .iter()
            .take(CLOZE_ITEMS)
            .enumerate()
            .map(|(index, word)| {
                let n = index + 1;
                ClozeEntry {
                    number: n.to_string(),
                    word: (*word).to_owned(),
                    clue: format!("选择适当的单词填空{n}"),
                }
            })
            .collect(),
    )
}
