//! Heuristic, offline exercise generation.

use super::{ExerciseProvider, GeneratedExercises, GenerationMode, GenerationRequest};
use crate::Result;
use crate::exercise::ExercisePayload;

/// Runs the local generators; never touches the network and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalExerciseProvider;

impl LocalExerciseProvider {
    /// Creates a new local provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ExerciseProvider for LocalExerciseProvider {
    fn mode(&self) -> GenerationMode {
        GenerationMode::Local
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedExercises> {
        let payload = ExercisePayload::generate(
            &request.text,
            &request.topic,
            &request.requirements,
            &request.flags,
        );
        Ok(GeneratedExercises::Structured(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::InclusionFlags;

    #[tokio::test]
    async fn honours_flags_and_topic() {
        let mut flags = InclusionFlags::none();
        flags.include_writing = true;
        let request = GenerationRequest::new("text")
            .with_topic("C篇")
            .with_flags(flags);

        let exercises = LocalExerciseProvider::new().generate(&request).await.unwrap();
        let payload = exercises.as_structured().unwrap();

        assert_eq!(payload.categories().len(), 1);
        assert_eq!(payload.micro_writing.as_ref().unwrap().scenario, "关于C篇的写作");
    }
}
