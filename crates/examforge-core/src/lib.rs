#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for text extraction.
pub const TRACING_TARGET_EXTRACT: &str = "examforge_core::extract";

/// Tracing target for exercise generation.
pub const TRACING_TARGET_GENERATION: &str = "examforge_core::generation";

/// Tracing target for document export.
pub const TRACING_TARGET_EXPORT: &str = "examforge_core::export";

mod error;

pub mod classify;
pub mod document;
pub mod exercise;
pub mod export;
#[cfg(any(test, feature = "mock"))]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub mod mock;
pub mod prompt;
pub mod service;

pub use crate::classify::{QuestionType, QuestionTypeSet, classify};
pub use crate::document::{ExtractedText, RawDocument, extract_text, split_articles};
pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::exercise::{ExercisePayload, InclusionFlags};
pub use crate::export::{ExportDocument, docx_file_name, text_file_name};
pub use crate::service::{
    CompletionProvider, CompletionRequest, CompletionResponse, ExerciseGenerationService,
    ExerciseProvider, GeneratedExercises, GenerationMode, GenerationRequest,
    LocalExerciseProvider, RemoteExerciseProvider,
};
