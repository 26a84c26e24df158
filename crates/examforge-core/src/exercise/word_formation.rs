//! Word-formation drills.
//!
//! Fixed example data: the drills do not depend on the paper.

use serde::{Deserialize, Serialize};

const GROUPS: [(&str, [&str; 3]); 3] = [
    ("动→名", ["discuss→discussion", "explain→explanation", "analyze→analysis"]),
    ("名→形", ["tradition→traditional", "culture→cultural", "nature→natural"]),
    ("副词", ["complete→completely", "true→truly", "happy→happily"]),
];

/// A transformation type and its examples, e.g. `动→名`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFormationGroup {
    /// Transformation label.
    pub transform: String,
    /// Examples written as `base→derived`.
    pub examples: Vec<String>,
}

/// Word-formation exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFormation(pub Vec<WordFormationGroup>);

/// Returns the fixed word-formation drills.
pub fn generate() -> WordFormation {
    WordFormation(
        GROUPS
            .iter()
            .map(|(transform, examples)| WordFormationGroup {
                transform: (*transform).to_owned(),
                examples: examples.iter().map(|e| (*e).to_owned()).collect(),
            })
            .collect(),
    )
}
