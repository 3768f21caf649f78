use once_cell::sync::Lazy;

use crate::{
    assessment::types::{
        ASSESSMENT_QUESTION_IDS, ASSESSMENT_RESPONSE_COUNT, MAX_ANSWER, MIN_ANSWER,
    },
    validation::{FieldRule, Schema},
};

pub static ASSESSMENT_RESPONSE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::object()
        .field("question_id", FieldRule::string().required().valid(&ASSESSMENT_QUESTION_IDS))
        .field("answer", FieldRule::integer().required().min(MIN_ANSWER).max(MAX_ANSWER))
});

pub static SUBMIT_ASSESSMENT_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::object()
        .field(
            "responses",
            FieldRule::array(FieldRule::object(ASSESSMENT_RESPONSE_SCHEMA.clone()))
                .required()
                .length(ASSESSMENT_RESPONSE_COUNT),
        )
        .field("started_at", FieldRule::iso_date())
        .field("completed_at", FieldRule::iso_date())
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::types::{AssessmentResponse, SubmitAssessmentRequest};
    use serde_json::json;

    fn full_submission() -> SubmitAssessmentRequest {
        SubmitAssessmentRequest::new(
            ASSESSMENT_QUESTION_IDS.iter().map(|id| AssessmentResponse::new(*id, 3)).collect(),
        )
    }

    #[test]
    fn test_accepts_complete_submission() {
        assert!(SUBMIT_ASSESSMENT_SCHEMA.validate_payload(&full_submission()).is_ok());
    }

    #[test]
    fn test_rejects_short_submission_with_required_count() {
        let request = SubmitAssessmentRequest::new(vec![AssessmentResponse::new("mood_1", 2)]);

        let err = SUBMIT_ASSESSMENT_SCHEMA.validate_payload(&request).unwrap_err();
        assert_eq!(err.to_string(), "\"responses\" must contain 25 items");
    }

    #[test]
    fn test_rejects_unknown_question_id() {
        let mut request = full_submission();
        request.responses[4].question_id = "focus_9".to_string();

        let err = SUBMIT_ASSESSMENT_SCHEMA.validate_payload(&request).unwrap_err();
        assert_eq!(err.field, "responses[4].question_id");
        assert!(err.reason.starts_with("must be one of [attention_1, attention_2"));
    }

    #[test]
    fn test_rejects_out_of_range_answer() {
        let mut request = full_submission();
        request.responses[0].answer = 9;

        let err = SUBMIT_ASSESSMENT_SCHEMA.validate_payload(&request).unwrap_err();
        assert_eq!(err.to_string(), "\"responses[0].answer\" must be less than or equal to 5");
    }

    #[test]
    fn test_missing_responses() {
        let err = SUBMIT_ASSESSMENT_SCHEMA.validate(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "\"responses\" is required");
    }
}
