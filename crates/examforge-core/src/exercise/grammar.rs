//! Grammar focus points.
//!
//! Fixed example data: the points do not depend on the paper.

use serde::{Deserialize, Serialize};

const FOCUS: [(&str, &[&str]); 4] = [
    ("非谓语动词", &["现在分词作状语", "过去分词作定语", "不定式作目的状语"]),
    ("定语从句", &["which/that引导", "who/whom引导", "介词+which/whom"]),
    ("状语从句", &["时间状语", "原因状语", "让步状语", "结果状语"]),
    ("名词性从句", &["主语从句", "宾语从句", "表语从句", "同位语从句"]),
];

/// A grammar topic with its focus points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarFocus {
    /// Grammar topic, e.g. `定语从句`.
    pub category: String,
    /// Points to practise.
    pub points: Vec<String>,
}

/// Grammar exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grammar(pub Vec<GrammarFocus>);

/// Returns the fixed grammar focus lists.
pub fn generate() -> Grammar {
    Grammar(
        FOCUS
            .iter()
            .map(|(category, points)| GrammarFocus {
                category: (*category).to_owned(),
                points: points.iter().map(|p| (*p).to_owned()).collect(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_topics() {
        let grammar = generate();
        let categories: Vec<_> = grammar.0.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["非谓语动词", "定语从句", "状语从句", "名词性从句"]);
        assert_eq!(grammar.0[2].points.len(), 4);
    }
}
