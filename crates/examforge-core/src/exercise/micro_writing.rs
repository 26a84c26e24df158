//! Guided micro-writing task.

use serde::{Deserialize, Serialize};

/// Requirements used when the caller gives none.
pub const DEFAULT_REQUIREMENTS: &str = "运用本课话题词汇，使用With复合结构";

/// A ~50 word writing task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroWriting {
    /// Scenario (情境).
    pub scenario: String,
    /// Target length (词数).
    pub word_count: String,
    /// Requirements (要求).
    pub requirements: String,
    /// Opening hint (开头提示).
    pub opening: String,
    /// Sample answer (参考范文).
    pub sample: String,
}

/// Builds the writing task for a topic.
pub fn generate(topic: &str, requirements: &str) -> MicroWriting {
    MicroWriting {
        scenario: format!("关于{topic}的写作"),
        word_count: "50词左右".to_owned(),
        requirements: requirements.to_owned(),
        opening: format!("Write about {topic}..."),
        sample: format!(
            "This essay discusses {topic}. {topic} is an important concept that affects our daily life. In conclusion..."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_topic_and_requirements() {
        let task = generate("B篇", DEFAULT_REQUIREMENTS);
        assert_eq!(task.scenario, "关于B篇的写作");
        assert_eq!(task.word_count, "50词左右");
        assert_eq!(task.requirements, DEFAULT_REQUIREMENTS);
        assert_eq!(task.opening, "Write about B篇...");
        assert!(task.sample.starts_with("This essay discusses B篇. B篇 is"));
    }

    #[test]
    fn empty_topic_still_formats() {
        let task = generate("", "");
        assert_eq!(task.scenario, "关于的写作");
        assert_eq!(task.requirements, "");
    }
}
