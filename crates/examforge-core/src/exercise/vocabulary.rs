//! Topic vocabulary from word frequencies.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of frequent words reported as topic vocabulary.
pub const TOPIC_WORD_LIMIT: usize = 10;

/// Label of the frequency-derived category.
pub const TOPIC_CATEGORY: &str = "话题词汇";

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-zA-Z]{5,}\b").unwrap_or_else(|err| panic!("invalid word pattern: {err}"))
});

const FIXED_CATEGORIES: [(&str, [&str; 5]); 3] = [
    ("动词", ["analyze", "explore", "discuss", "examine", "investigate"]),
    ("名词", ["concept", "principle", "theory", "perspective", "framework"]),
    ("形容词", ["significant", "essential", "fundamental", "crucial", "vital"]),
];

/// One labelled list of words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyGroup {
    /// Category label, e.g. `话题词汇`.
    pub category: String,
    /// Words in display order.
    pub words: Vec<String>,
}

impl VocabularyGroup {
    fn new<I, S>(category: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// Vocabulary exercise: ordered word categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary(pub Vec<VocabularyGroup>);

impl Vocabulary {
    /// Returns the words of the frequency-derived category.
    pub fn topic_words(&self) -> &[String] {
        self.0
            .iter()
            .find(|group| group.category == TOPIC_CATEGORY)
            .map(|group| group.words.as_slice())
            .unwrap_or_default()
    }
}

/// Returns up to `limit` words of five or more ASCII letters, most frequent
/// first, ties broken by first occurrence.
pub fn frequent_words(text: &str, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    // word -> (count, first index)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, found) in WORD_PATTERN.find_iter(&lowered).enumerate() {
        counts.entry(found.as_str()).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_owned())
        .collect()
}

/// Builds the vocabulary exercise for a text.
pub fn generate(text: &str) -> Vocabulary {
    let mut groups = Vec::with_capacity(FIXED_CATEGORIES.len() + 1);
    groups.push(VocabularyGroup::new(
        TOPIC_CATEGORY,
        frequent_words(text, TOPIC_WORD_LIMIT),
    ));
    groups.extend(
        FIXED_CATEGORIES
            .iter()
            .map(|(category, words)| VocabularyGroup::new(*category, *words)),
    );
    Vocabulary(groups)
}
