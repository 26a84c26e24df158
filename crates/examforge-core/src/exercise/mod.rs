//! Exercise generators and the payload they produce.
//!
//! Every generator is a pure function over the extracted text and never fails.
//! Only [`vocabulary`] and [`micro_writing`] depend on their input; the others
//! return fixed example data (see [`ExerciseCategory::is_stub`]).

pub mod cloze;
pub mod discourse;
pub mod grammar;
pub mod micro_writing;
pub mod phrase;
pub mod vocabulary;
pub mod word_formation;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

pub use self::cloze::{Cloze, ClozeEntry};
pub use self::discourse::{ConnectiveGap, Discourse, ParagraphRole};
pub use self::grammar::{Grammar, GrammarFocus};
pub use self::micro_writing::{DEFAULT_REQUIREMENTS, MicroWriting};
pub use self::phrase::PhraseTranslation;
pub use self::vocabulary::{Vocabulary, VocabularyGroup};
pub use self::word_formation::{WordFormation, WordFormationGroup};

/// Exercise kinds, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ExerciseCategory {
    Vocabulary,
    WordFormation,
    PhraseTranslation,
    Discourse,
    MicroWriting,
    Cloze,
    Grammar,
}

impl ExerciseCategory {
    /// Returns the section heading used in exported documents.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Vocabulary => "一、话题词汇",
            Self::WordFormation => "二、词性变形",
            Self::PhraseTranslation => "三、短语翻译",
            Self::Discourse => "四、语篇结构",
            Self::MicroWriting => "五、微写作",
            Self::Cloze => "六、语境填词",
            Self::Grammar => "七、语法专项",
        }
    }

    /// Returns `true` if the generator returns fixed example data regardless
    /// of the paper.
    pub fn is_stub(self) -> bool {
        matches!(
            self,
            Self::WordFormation | Self::PhraseTranslation | Self::Discourse | Self::Grammar
        )
    }
}

/// Which categories to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InclusionFlags {
    pub include_vocab: bool,
    pub include_word_form: bool,
    pub include_phrase: bool,
    pub include_cloze: bool,
    pub include_discourse: bool,
    pub include_writing: bool,
    pub include_grammar: bool,
}

impl Default for InclusionFlags {
    fn default() -> Self {
        Self {
            include_vocab: true,
            include_word_form: true,
            include_phrase: true,
            include_cloze: true,
            include_discourse: true,
            include_writing: true,
            include_grammar: false,
        }
    }
}

impl InclusionFlags {
    /// Flags with every category switched off.
    pub fn none() -> Self {
        Self {
            include_vocab: false,
            include_word_form: false,
            include_phrase: false,
            include_cloze: false,
            include_discourse: false,
            include_writing: false,
            include_grammar: false,
        }
    }

    /// Returns `true` if the category is switched on.
    pub fn includes(&self, category: ExerciseCategory) -> bool {
        match category {
            ExerciseCategory::Vocabulary => self.include_vocab,
            ExerciseCategory::WordFormation => self.include_word_form,
            ExerciseCategory::PhraseTranslation => self.include_phrase,
            ExerciseCategory::Discourse => self.include_discourse,
            ExerciseCategory::MicroWriting => self.include_writing,
            ExerciseCategory::Cloze => self.include_cloze,
            ExerciseCategory::Grammar => self.include_grammar,
        }
    }

    /// Form field names of the category switches.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "include_vocab",
        "include_word_form",
        "include_phrase",
        "include_cloze",
        "include_discourse",
        "include_writing",
        "include_grammar",
    ];

    /// Returns `true` if `name` is one of [`FIELD_NAMES`](Self::FIELD_NAMES).
    pub fn is_field_name(name: &str) -> bool {
        Self::FIELD_NAMES.contains(&name)
    }

    /// Switches a category on or off by its form field name.
    ///
    /// Returns `false` if the name is not an inclusion flag.
    pub fn set_by_name(&mut self, name: &str, value: bool) -> bool {
        let flag = match name {
            "include_vocab" => &mut self.include_vocab,
            "include_word_form" => &mut self.include_word_form,
            "include_phrase" => &mut self.include_phrase,
            "include_cloze" => &mut self.include_cloze,
            "include_discourse" => &mut self.include_discourse,
            "include_writing" => &mut self.include_writing,
            "include_grammar" => &mut self.include_grammar,
            _ => return false,
        };
        *flag = value;
        true
    }
}

/// Generated exercises, one optional entry per category.
///
/// Absent categories are omitted from the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vocabulary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_formation: Option<WordFormation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase_translation: Option<PhraseTranslation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloze: Option<Cloze>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discourse: Option<Discourse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micro_writing: Option<MicroWriting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammar: Option<Grammar>,
}

impl ExercisePayload {
    /// Runs the generators selected by `flags`.
    pub fn generate(text: &str, topic: &str, requirements: &str, flags: &InclusionFlags) -> Self {
        let mut payload = Self::default();

        for category in ExerciseCategory::iter().filter(|c| flags.includes(*c)) {
            match category {
                ExerciseCategory::Vocabulary => {
                    payload.vocabulary = Some(vocabulary::generate(text));
                }
                ExerciseCategory::WordFormation => {
                    payload.word_formation = Some(word_formation::generate());
                }
                ExerciseCategory::PhraseTranslation => {
                    payload.phrase_translation = Some(phrase::generate());
                }
                ExerciseCategory::Discourse => {
                    payload.discourse = Some(discourse::generate());
                }
                ExerciseCategory::MicroWriting => {
                    payload.micro_writing = Some(micro_writing::generate(topic, requirements));
                }
                ExerciseCategory::Cloze => {
                    payload.cloze = Some(cloze::generate());
                }
                ExerciseCategory::Grammar => {
                    payload.grammar = Some(grammar::generate());
                }
            }
        }

        payload
    }

    /// Returns `true` if the category is present.
    pub fn contains(&self, category: ExerciseCategory) -> bool {
        match category {
            ExerciseCategory::Vocabulary => self.vocabulary.is_some(),
            ExerciseCategory::WordFormation => self.word_formation.is_some(),
            ExerciseCategory::PhraseTranslation => self.phrase_translation.is_some(),
            ExerciseCategory::Discourse => self.discourse.is_some(),
            ExerciseCategory::MicroWriting => self.micro_writing.is_some(),
            ExerciseCategory::Cloze => self.cloze.is_some(),
            ExerciseCategory::Grammar => self.grammar.is_some(),
        }
    }

    /// Returns the present categories in export order.
    pub fn categories(&self) -> Vec<ExerciseCategory> {
        ExerciseCategory::iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Returns `true` if no category is present.
    pub fn is_empty(&self) -> bool {
        self.categories().is_empty()
    }
}
