use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

/// Reference data used to populate profile forms.
#[derive(Debug, Clone)]
pub struct LookupApi {
    client: Arc<HttpClient>,
}

impl LookupApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn genders(&self) -> ApiResult<Option<Value>> {
        self.client.get("lookup/gender").await
    }

    pub async fn education_levels(&self) -> ApiResult<Option<Value>> {
        self.client.get("lookup/education-level").await
    }

    pub async fn marital_statuses(&self) -> ApiResult<Option<Value>> {
        self.client.get("lookup/marital-status").await
    }

    pub async fn subscription_levels(&self) -> ApiResult<Option<Value>> {
        self.client.get("lookup/subscription-level").await
    }
}
