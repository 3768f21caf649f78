use nestre_core::assessment::SUBMIT_ASSESSMENT_SCHEMA;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    guard::{checked_payload, path_id},
    http::HttpClient,
    types::ApiResult,
};

#[derive(Debug, Clone)]
pub struct AssessmentApi {
    client: Arc<HttpClient>,
}

impl AssessmentApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Get the assessment questions in the order they should be shown to the
    /// user.
    pub async fn get_randomized_questions(&self, user_id: &str) -> ApiResult<Option<Value>> {
        let user_id = path_id("AssessmentApi.get_randomized_questions", "user_id", user_id)?;

        self.client.get(&format!("user/{}/assessment/randomized-questions", user_id)).await
    }

    /// Submit a completed assessment.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user taking the assessment
    /// * `submission` - A `SubmitAssessmentRequest` or any payload of the same
    ///   shape; it must carry exactly 25 responses
    pub async fn submit<B>(&self, user_id: &str, submission: &B) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        const CONTEXT: &str = "AssessmentApi.submit";
        let user_id = path_id(CONTEXT, "user_id", user_id)?;
        let body = checked_payload(CONTEXT, &SUBMIT_ASSESSMENT_SCHEMA, submission)?;

        self.client.post(&format!("user/{}/assessment", user_id), &body).await
    }
}
