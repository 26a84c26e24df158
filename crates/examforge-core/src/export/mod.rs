//! Downloadable documents built from generated exercises.

mod docx;
mod naming;

pub use self::naming::{
    DOCX_CONTENT_TYPE, FALLBACK_STEM, TEXT_CONTENT_TYPE, docx_file_name, text_file_name,
};
use crate::exercise::{ExerciseCategory, ExercisePayload};
use crate::{Result, TRACING_TARGET_EXPORT};

/// A unit of content inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Plain paragraph.
    Paragraph(String),
    /// Bulleted line.
    Bullet(String),
    /// Two-column table with a header row.
    Table {
        header: [String; 2],
        rows: Vec<[String; 2]>,
    },
}

impl Block {
    fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }
}

/// A headed group of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section heading, e.g. `一、话题词汇`.
    pub heading: String,
    /// Content in display order.
    pub blocks: Vec<Block>,
}

/// Format-independent layout of an exported exercise document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Document title.
    pub title: String,
    /// Sections in display order.
    pub sections: Vec<Section>,
}

impl ExportDocument {
    /// Lays out the present categories of `payload` under a title for `topic`.
    ///
    /// Fails with a payload shape error if the phrase-translation columns
    /// differ in length; nothing is rendered in that case.
    pub fn from_payload(payload: &ExercisePayload, topic: &str) -> Result<Self> {
        let mut sections = Vec::new();

        for category in payload.categories() {
            let blocks = match category {
                ExerciseCategory::Vocabulary => vocabulary_blocks(payload),
                ExerciseCategory::WordFormation => word_formation_blocks(payload),
                ExerciseCategory::PhraseTranslation => phrase_blocks(payload)?,
                ExerciseCategory::Discourse => discourse_blocks(payload),
                ExerciseCategory::MicroWriting => micro_writing_blocks(payload),
                ExerciseCategory::Cloze => cloze_blocks(payload),
                ExerciseCategory::Grammar => grammar_blocks(payload),
            };
            sections.push(Section {
                heading: category.heading().to_owned(),
                blocks,
            });
        }

        tracing::debug!(
            target: TRACING_TARGET_EXPORT,
            topic,
            sections = sections.len(),
            "laid out export document"
        );

        Ok(Self {
            title: format!("{topic} - 二次开发练习"),
            sections,
        })
    }

    /// Returns the section with the given heading.
    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

fn vocabulary_blocks(payload: &ExercisePayload) -> Vec<Block> {
    let Some(vocabulary) = &payload.vocabulary else {
        return Vec::new();
    };
    vocabulary
        .0
        .iter()
        .map(|group| Block::paragraph(format!("{}: {}", group.category, group.words.join(", "))))
        .collect()
}

fn word_formation_blocks(payload: &ExercisePayload) -> Vec<Block> {
    let Some(drills) = &payload.word_formation else {
        return Vec::new();
    };
    let mut blocks = Vec::new();
    for group in &drills.0 {
        blocks.push(Block::paragraph(format!("{}:", group.transform)));
        blocks.extend(group.examples.iter().cloned().map(Block::Bullet));
    }
    blocks
}

fn phrase_blocks(payload: &ExercisePayload) -> Result<Vec<Block>> {
    let Some(phrases) = &payload.phrase_translation else {
        return Ok(Vec::new());
    };
    let rows = phrases
        .pairs()?
        .into_iter()
        .map(|(cn, en)| [cn.to_owned(), en.to_owned()])
        .collect();
    Ok(vec![Block::Table {
        header: ["中文".to_owned(), "英文".to_owned()],
        rows,
    }])
}

fn discourse_blocks(payload: &ExercisePayload) -> Vec<Block> {
    let Some(discourse) = &payload.discourse else {
        return Vec::new();
    };
    let mut blocks = vec![Block::paragraph("宏观骨架：")];
    blocks.extend(discourse.skeleton.iter().map(|role| {
        Block::paragraph(format!(
            "{}: {} - {}",
            role.paragraph, role.function, role.content
        ))
    }));
    blocks.push(Block::paragraph("衔接词挖空："));
    blocks.extend(discourse.connectives.iter().map(|gap| {
        Block::paragraph(format!(
            "{} → 答案: {} ({})",
            gap.gapped, gap.answer, gap.logic
        ))
    }));
    blocks
}

fn micro_writing_blocks(payload: &ExercisePayload) -> Vec<Block> {
    let Some(task) = &payload.micro_writing else {
        return Vec::new();
    };
    vec![
        Block::paragraph(format!("情境: {}", task.scenario)),
        Block::paragraph(format!("词数: {}", task.word_count)),
        Block::paragraph(format!("要求: {}", task.requirements)),
        Block::paragraph(format!("开头提示: {}", task.opening)),
        Block::paragraph(format!("参考范文: {}", task.sample)),
    ]
}

fn cloze_blocks(payload: &ExercisePayload) -> Vec<Block> {
    let Some(cloze) = &payload.cloze else {
        return Vec::new();
    };
    cloze
        .0
        .iter()
        .map(|entry| {
            Block::paragraph(format!("{}. {} ({})", entry.number, entry.clue, entry.word))
        })
        .collect()
}

fn grammar_blocks(payload: &ExercisePayload) -> Vec<Block> {
    let Some(grammar) = &payload.grammar else {
        return Vec::new();
    };
    grammar
        .0
        .iter()
        .map(|focus| Block::paragraph(format!("{}: {}", focus.category, focus.points.join("、"))))
        .collect()
}
