//! Service layer for exercise generation.
//!
//! This module provides the generation seam:
//! - [`ExerciseProvider`] - trait implemented by each generation strategy
//! - [`ExerciseGenerationService`] - service wrapper with observability
//! - [`LocalExerciseProvider`] - heuristic generators, no network
//! - [`RemoteExerciseProvider`] - prompt sent to a [`CompletionProvider`]

mod completion;
mod generation;
mod local;
mod remote;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString, IntoStaticStr};
use uuid::Uuid;

pub use self::completion::{CompletionProvider, CompletionRequest, CompletionResponse};
pub use self::generation::ExerciseGenerationService;
pub use self::local::LocalExerciseProvider;
pub use self::remote::RemoteExerciseProvider;
use crate::exercise::{DEFAULT_REQUIREMENTS, ExercisePayload, InclusionFlags};
use crate::{Error, Result};

/// Topic used when the caller selects none.
pub const DEFAULT_TOPIC: &str = "A篇";

/// Topics offered to users; any non-empty string is accepted.
pub const TOPIC_CHOICES: [&str; 7] = ["A篇", "B篇", "C篇", "D篇", "七选五", "完形填空", "语法填空"];

/// How exercises are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, IntoStaticStr, EnumString)]
#[cfg_attr(feature = "config", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationMode {
    /// Heuristic generators; structured output.
    #[default]
    Local,
    /// Hosted language model; free-form output.
    Remote,
}

impl GenerationMode {
    /// Returns the mode as a lowercase string.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to generate exercises for one paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// Extracted paper text.
    pub text: String,
    /// Selected passage or section, e.g. `A篇`.
    pub topic: String,
    /// Requirements for the writing task.
    pub requirements: String,
    /// Categories to generate.
    pub flags: InclusionFlags,
}

impl GenerationRequest {
    /// Creates a request with the default topic, requirements and flags.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            text: text.into(),
            topic: DEFAULT_TOPIC.to_owned(),
            requirements: DEFAULT_REQUIREMENTS.to_owned(),
            flags: InclusionFlags::default(),
        }
    }

    /// Sets the topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Sets the writing requirements.
    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = requirements.into();
        self
    }

    /// Sets the inclusion flags.
    pub fn with_flags(mut self, flags: InclusionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Rejects requests that cannot produce meaningful output.
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(Error::invalid_input().with_message("topic must not be empty"));
        }
        Ok(())
    }
}

/// Output of one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "camelCase")]
pub enum GeneratedExercises {
    /// Categorised exercises from the local generators.
    Structured(ExercisePayload),
    /// Model output, returned verbatim.
    FreeForm(String),
}

impl GeneratedExercises {
    /// Returns the structured payload, if any.
    pub fn as_structured(&self) -> Option<&ExercisePayload> {
        match self {
            Self::Structured(payload) => Some(payload),
            Self::FreeForm(_) => None,
        }
    }

    /// Returns the free-form text, if any.
    pub fn as_free_form(&self) -> Option<&str> {
        match self {
            Self::Structured(_) => None,
            Self::FreeForm(text) => Some(text),
        }
    }
}

/// A strategy that turns a [`GenerationRequest`] into exercises.
#[async_trait::async_trait]
pub trait ExerciseProvider: Send + Sync {
    /// Returns the mode this provider implements.
    fn mode(&self) -> GenerationMode;

    /// Generates exercises for the request.
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedExercises>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults() {
        let request = GenerationRequest::new("text");
        assert_eq!(request.topic, "A篇");
        assert_eq!(request.requirements, DEFAULT_REQUIREMENTS);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn blank_topic_is_invalid() {
        let err = GenerationRequest::new("text").with_topic("  ").validate().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidInput);
    }

    #[test]
    fn mode_parses_lowercase() {
        assert_eq!("remote".parse::<GenerationMode>().unwrap(), GenerationMode::Remote);
        assert_eq!(GenerationMode::Local.to_string(), "local");
    }

    #[test]
    fn free_form_serializes_with_kind_tag() {
        let json = serde_json::to_value(GeneratedExercises::FreeForm("hi".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "freeForm", "content": "hi" }));
    }
}
