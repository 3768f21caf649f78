use nestre_core::frame::{CREATE_FRAME_SCHEMA, UPDATE_FRAME_SCHEMA};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    guard::{checked_payload, path_id},
    http::HttpClient,
    types::ApiResult,
};

/// A user's saved mental frames.
#[derive(Debug, Clone)]
pub struct FrameApi {
    client: Arc<HttpClient>,
}

impl FrameApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn create<B>(&self, user_id: &str, frame: &B) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        const CONTEXT: &str = "FrameApi.create";
        let user_id = path_id(CONTEXT, "user_id", user_id)?;
        let body = checked_payload(CONTEXT, &CREATE_FRAME_SCHEMA, frame)?;

        self.client.post(&format!("user/{}/frame", user_id), &body).await
    }

    pub async fn get(&self, user_id: &str, frame_id: &str) -> ApiResult<Option<Value>> {
        const CONTEXT: &str = "FrameApi.get";
        let user_id = path_id(CONTEXT, "user_id", user_id)?;
        let frame_id = path_id(CONTEXT, "frame_id", frame_id)?;

        self.client.get(&format!("user/{}/frame/{}", user_id, frame_id)).await
    }

    /// Partially update a frame; at least one field has to be provided.
    pub async fn update<B>(
        &self,
        user_id: &str,
        frame_id: &str,
        changes: &B,
    ) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        const CONTEXT: &str = "FrameApi.update";
        let user_id = path_id(CONTEXT, "user_id", user_id)?;
        let frame_id = path_id(CONTEXT, "frame_id", frame_id)?;
        let body = checked_payload(CONTEXT, &UPDATE_FRAME_SCHEMA, changes)?;

        self.client.patch(&format!("user/{}/frame/{}", user_id, frame_id), &body).await
    }

    pub async fn delete(&self, user_id: &str, frame_id: &str) -> ApiResult<Option<Value>> {
        const CONTEXT: &str = "FrameApi.delete";
        let user_id = path_id(CONTEXT, "user_id", user_id)?;
        let frame_id = path_id(CONTEXT, "frame_id", frame_id)?;

        self.client.delete(&format!("user/{}/frame/{}", user_id, frame_id)).await
    }

    pub async fn list(&self, user_id: &str) -> ApiResult<Option<Value>> {
        let user_id = path_id("FrameApi.list", "user_id", user_id)?;

        self.client.get(&format!("user/{}/frames", user_id)).await
    }
}
