use serde_json::Value;
use std::sync::Arc;

use crate::api::{guard::path_id, http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct MentalFramingApi {
    client: Arc<HttpClient>,
}

impl MentalFramingApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get(&self, user_id: &str) -> ApiResult<Option<Value>> {
        let user_id = path_id("MentalFramingApi.get", "user_id", user_id)?;

        self.client.get(&format!("user/{}/mental-framing", user_id)).await
    }
}
