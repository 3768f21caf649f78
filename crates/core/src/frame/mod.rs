use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldRule, Schema};

pub const MAX_FRAME_TITLE_LENGTH: usize = 200;
pub const MAX_FRAME_DESCRIPTION_LENGTH: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameType {
    Challenge,
    Opportunity,
    Gratitude,
    Perspective,
}

impl FrameType {
    pub const ALL: [FrameType; 4] = [
        FrameType::Challenge,
        FrameType::Opportunity,
        FrameType::Gratitude,
        FrameType::Perspective,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FrameType::Challenge => "challenge",
            FrameType::Opportunity => "opportunity",
            FrameType::Gratitude => "gratitude",
            FrameType::Perspective => "perspective",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFrameRequest {
    pub title: String,
    pub frame_type: FrameType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<String>>,
}

impl CreateFrameRequest {
    pub fn new(title: impl Into<String>, frame_type: FrameType) -> Self {
        Self { title: title.into(), frame_type, description: None, tags: None }
    }
}

/// Partial update, at least one field has to be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFrameRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub frame_type: Option<FrameType>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<String>>,
}

fn frame_schema(title: FieldRule, frame_type: FieldRule) -> Schema {
    Schema::object()
        .field("title", title.max_length(MAX_FRAME_TITLE_LENGTH))
        .field("frame_type", frame_type.valid(&FrameType::ALL.map(FrameType::as_str)))
        .field("description", FieldRule::string().max_length(MAX_FRAME_DESCRIPTION_LENGTH))
        .field("tags", FieldRule::array(FieldRule::string()).max_length(20))
}

pub static CREATE_FRAME_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    frame_schema(FieldRule::string().required(), FieldRule::string().required())
});

pub static UPDATE_FRAME_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    frame_schema(FieldRule::string(), FieldRule::string())
        .at_least_one_of(&["title", "frame_type", "description", "tags"])
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_requires_title() {
        let err = CREATE_FRAME_SCHEMA.validate(&json!({ "frame_type": "challenge" })).unwrap_err();
        assert_eq!(err.to_string(), "\"title\" is required");
    }

    #[test]
    fn test_create_accepts_minimal_frame() {
        let request = CreateFrameRequest::new("Exam week", FrameType::Challenge);
        assert!(CREATE_FRAME_SCHEMA.validate_payload(&request).is_ok());
    }

    #[test]
    fn test_update_requires_one_field() {
        let err =
            UPDATE_FRAME_SCHEMA.validate_payload(&UpdateFrameRequest::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"value\" must contain at least one of [title, frame_type, description, tags]"
        );

        let update = UpdateFrameRequest { tags: Some(vec!["work".into()]), ..Default::default() };
        assert!(UPDATE_FRAME_SCHEMA.validate_payload(&update).is_ok());
    }

    #[test]
    fn test_title_length_is_capped() {
        let update = UpdateFrameRequest {
            title: Some("x".repeat(MAX_FRAME_TITLE_LENGTH + 1)),
            ..Default::default()
        };

        let err = UPDATE_FRAME_SCHEMA.validate_payload(&update).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"title\" length must be less than or equal to 200 characters long"
        );
    }
}
