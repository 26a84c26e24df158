//! Exercise request types.

use examforge_core::ExercisePayload;
use examforge_core::service::DEFAULT_TOPIC;
use serde::Deserialize;

use crate::handler::{ErrorKind, Result};

/// Request body of `POST /exercises/export`.
#[must_use]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportExercises {
    /// Topic used in the document title and file name.
    #[serde(default = "default_topic")]
    pub topic: String,
    /// Previously generated structured exercises.
    pub exercises: ExercisePayload,
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_owned()
}

impl ExportExercises {
    /// Rejects a blank topic.
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(ErrorKind::BadRequest
                .with_message("Topic must not be empty")
                .with_resource("topic"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_defaults_when_absent() {
        let request: ExportExercises =
            serde_json::from_value(serde_json::json!({ "exercises": {} })).unwrap();
        assert_eq!(request.topic, DEFAULT_TOPIC);
        assert!(request.exercises.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn blank_topic_is_rejected() {
        let request: ExportExercises = serde_json::from_value(serde_json::json!({
            "topic": " ",
            "exercises": {}
        }))
        .unwrap();
        assert_eq!(request.validate().unwrap_err().kind(), ErrorKind::BadRequest);
    }
}
