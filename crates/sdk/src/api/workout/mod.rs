use serde_json::Value;
use std::sync::Arc;

use crate::api::{guard::path_id, http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct WorkoutApi {
    client: Arc<HttpClient>,
}

impl WorkoutApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Today's mix of exercises and content for a user.
    pub async fn daily_workout(&self, user_id: &str) -> ApiResult<Option<Value>> {
        let user_id = path_id("WorkoutApi.daily_workout", "user_id", user_id)?;

        self.client.get(&format!("user/{}/daily-workout", user_id)).await
    }
}
