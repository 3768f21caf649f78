use nestre_core::content::{ContentType, CONTENT_INTERACTION_SCHEMA};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    guard::{checked_payload, path_id, positive_integer},
    http::HttpClient,
    types::ApiResult,
};

/// Articles, audio, video and meditations.
#[derive(Debug, Clone)]
pub struct ContentApi {
    client: Arc<HttpClient>,
}

impl ContentApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Record that a user viewed, finished, liked... a piece of content.
    pub async fn record_interaction<B>(
        &self,
        user_id: &str,
        content_type: ContentType,
        interaction: &B,
    ) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        const CONTEXT: &str = "ContentApi.record_interaction";
        let user_id = path_id(CONTEXT, "user_id", user_id)?;
        let body = checked_payload(CONTEXT, &CONTENT_INTERACTION_SCHEMA, interaction)?;

        self.client.post(&format!("user/{}/{}-interaction", user_id, content_type), &body).await
    }

    /// Personalised recommendations of one content type.
    ///
    /// # Arguments
    ///
    /// * `num_recommendations` - How many items to return, must be positive
    pub async fn recommendations(
        &self,
        user_id: &str,
        content_type: ContentType,
        num_recommendations: i64,
    ) -> ApiResult<Option<Value>> {
        const CONTEXT: &str = "ContentApi.recommendations";
        let user_id = path_id(CONTEXT, "user_id", user_id)?;
        let count = positive_integer(CONTEXT, "num_recommendations", num_recommendations)?;

        self.client
            .get_with_query(
                &format!("user/{}/{}/recommendations", user_id, content_type),
                &[("num_recommendations", count)],
            )
            .await
    }
}
