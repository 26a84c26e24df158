//! Exercise generation response types.

use examforge_core::{GeneratedExercises, GenerationMode, QuestionTypeSet};
use serde::Serialize;
use uuid::Uuid;

/// Exercises generated for one paper.
#[must_use]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedExercisesResponse {
    /// Identifier of the generation request.
    pub request_id: Uuid,
    /// Mode that produced the exercises.
    pub mode: GenerationMode,
    /// Topic the exercises were generated for.
    pub topic: String,
    /// Suggested name for the downloadable document.
    pub file_name: String,
    /// Sections detected in the uploaded paper.
    pub question_types: QuestionTypeSet,
    /// Structured payload or free-form model output.
    pub exercises: GeneratedExercises,
}
