use nestre_core::cogex::COGEX_INTERACTION_SCHEMA;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    guard::{checked_payload, path_id},
    http::HttpClient,
    types::ApiResult,
};

/// Cognitive exercises ("cogex").
#[derive(Debug, Clone)]
pub struct CogexApi {
    client: Arc<HttpClient>,
}

impl CogexApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// The exercises available to a user along with their progress.
    pub async fn get_cognitive_exercises(&self, user_id: &str) -> ApiResult<Option<Value>> {
        let user_id = path_id("CogexApi.get_cognitive_exercises", "user_id", user_id)?;

        self.client.get(&format!("user/{}/cogex", user_id)).await
    }

    /// Record one play-through of an exercise.
    pub async fn record_cognitive_exercise_interaction<B>(
        &self,
        user_id: &str,
        interaction: &B,
    ) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        const CONTEXT: &str = "CogexApi.record_cognitive_exercise_interaction";
        let user_id = path_id(CONTEXT, "user_id", user_id)?;
        let body = checked_payload(CONTEXT, &COGEX_INTERACTION_SCHEMA, interaction)?;

        self.client.post(&format!("user/{}/cogex/interaction", user_id), &body).await
    }
}
