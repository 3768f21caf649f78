use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of answers a complete assessment must carry.
pub const ASSESSMENT_RESPONSE_COUNT: usize = 25;

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

/// The fixed question bank. Five questions for each of the five assessed
/// domains.
pub const ASSESSMENT_QUESTION_IDS: [&str; ASSESSMENT_RESPONSE_COUNT] = [
    "attention_1",
    "attention_2",
    "attention_3",
    "attention_4",
    "attention_5",
    "memory_1",
    "memory_2",
    "memory_3",
    "memory_4",
    "memory_5",
    "mood_1",
    "mood_2",
    "mood_3",
    "mood_4",
    "mood_5",
    "resilience_1",
    "resilience_2",
    "resilience_3",
    "resilience_4",
    "resilience_5",
    "sleep_1",
    "sleep_2",
    "sleep_3",
    "sleep_4",
    "sleep_5",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub question_id: String,
    /// Likert answer between [`MIN_ANSWER`] and [`MAX_ANSWER`].
    pub answer: u8,
}

impl AssessmentResponse {
    pub fn new(question_id: impl Into<String>, answer: u8) -> Self {
        Self { question_id: question_id.into(), answer }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub responses: Vec<AssessmentResponse>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl SubmitAssessmentRequest {
    pub fn new(responses: Vec<AssessmentResponse>) -> Self {
        Self { responses, started_at: None, completed_at: None }
    }
}
