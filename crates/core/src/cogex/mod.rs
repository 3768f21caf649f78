use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldRule, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CogexOutcome {
    Completed,
    Failed,
    Abandoned,
}

impl CogexOutcome {
    pub const ALL: [CogexOutcome; 3] =
        [CogexOutcome::Completed, CogexOutcome::Failed, CogexOutcome::Abandoned];

    pub fn as_str(self) -> &'static str {
        match self {
            CogexOutcome::Completed => "completed",
            CogexOutcome::Failed => "failed",
            CogexOutcome::Abandoned => "abandoned",
        }
    }
}

/// One play-through of a cognitive exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CogexInteraction {
    pub cogex_id: String,
    pub level: u32,
    pub outcome: CogexOutcome,
    /// Percentage score, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration_seconds: Option<u32>,
}

impl CogexInteraction {
    pub fn new(cogex_id: impl Into<String>, level: u32, outcome: CogexOutcome) -> Self {
        Self { cogex_id: cogex_id.into(), level, outcome, score: None, duration_seconds: None }
    }
}

pub static COGEX_INTERACTION_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::object()
        .field("cogex_id", FieldRule::string().required())
        .field("level", FieldRule::integer().required().min(1))
        .field(
            "outcome",
            FieldRule::string().required().valid(&CogexOutcome::ALL.map(CogexOutcome::as_str)),
        )
        .field("score", FieldRule::number().min(0).max(100))
        .field("duration_seconds", FieldRule::integer().min(0))
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_interaction() {
        let mut interaction = CogexInteraction::new("pattern-match", 3, CogexOutcome::Completed);
        interaction.score = Some(87.5);

        assert!(COGEX_INTERACTION_SCHEMA.validate_payload(&interaction).is_ok());
    }

    #[test]
    fn test_level_must_be_positive() {
        let interaction = CogexInteraction::new("pattern-match", 0, CogexOutcome::Failed);

        let err = COGEX_INTERACTION_SCHEMA.validate_payload(&interaction).unwrap_err();
        assert_eq!(err.to_string(), "\"level\" must be greater than or equal to 1");
    }

    #[test]
    fn test_unknown_outcome() {
        let err = COGEX_INTERACTION_SCHEMA
            .validate(&json!({ "cogex_id": "x", "level": 1, "outcome": "paused" }))
            .unwrap_err();
        assert_eq!(err.to_string(), "\"outcome\" must be one of [completed, failed, abandoned]");
    }
}
