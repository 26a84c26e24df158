//! Discourse structure: paragraph roles and connective gaps.
//!
//! Fixed example data: the outline does not depend on the paper.

use serde::{Deserialize, Serialize};

/// The role a paragraph plays in the passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphRole {
    /// Paragraph label, e.g. `Para 1`.
    pub paragraph: String,
    /// Function of the paragraph, e.g. `引言`.
    pub function: String,
    /// What the paragraph does, e.g. `引出主题`.
    pub content: String,
}

/// A sentence with its connective blanked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectiveGap {
    /// The sentence as written.
    pub original: String,
    /// The sentence with the connective replaced by a blank.
    pub gapped: String,
    /// The removed connective.
    pub answer: String,
    /// Logical relation the connective expresses, e.g. `因果`.
    pub logic: String,
}

/// Discourse structure exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discourse {
    /// Macro skeleton (宏观骨架).
    pub skeleton: Vec<ParagraphRole>,
    /// Connective gaps (衔接词).
    pub connectives: Vec<ConnectiveGap>,
}

const SKELETON: [(&str, &str, &str); 4] = [
    ("Para 1", "引言", "引出主题"),
    ("Para 2", "论点1", "主要论点"),
    ("Para 3", "论点2", "支持论据"),
    ("Para 4", "结论", "总结升华"),
];

const CONNECTIVES: [(&str, &str, &str, &str); 2] = [
    ("...is important.", "________, ... is important.", "Therefore", "因果"),
    ("However, ...", "________, ...", "However", "转折"),
];

/// Returns the fixed four-paragraph outline and connective gaps.
pub fn generate() -> Discourse {
    let skeleton = SKELETON
        .iter()
        .map(|(paragraph, function, content)| ParagraphRole {
            paragraph: (*paragraph).to_owned(),
            function: (*function).to_owned(),
            content: (*content).to_owned(),
        })
        .collect();

    let connectives = CONNECTIVES
        .iter()
        .map(|(original, gapped, answer, logic)| ConnectiveGap {
            original: (*original).to_owned(),
            gapped: (*gapped).to_owned(),
            answer: (*answer).to_owned(),
            logic: (*logic).to_owned(),
        })
        .collect();

    Discourse {
        skeleton,
        connectives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_shape() {
        let discourse = generate();
        assert_eq!(discourse.skeleton.len(), 4);
        assert_eq!(discourse.skeleton[3].function, "结论");
        assert_eq!(discourse.connectives.len(), 2);
        assert_eq!(discourse.connectives[1].answer, "However");
    }
}
