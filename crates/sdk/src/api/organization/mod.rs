use serde_json::Value;
use std::sync::Arc;

use crate::api::{guard::path_id, http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct OrganizationApi {
    client: Arc<HttpClient>,
}

impl OrganizationApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Every organization the caller can see, with its tags.
    pub async fn list_with_tags(&self) -> ApiResult<Option<Value>> {
        self.client.get("org/list-with-tags").await
    }

    /// Get an organization
    ///
    /// # Arguments
    ///
    /// * `org_id` - The organization id
    pub async fn get(&self, org_id: &str) -> ApiResult<Option<Value>> {
        let org_id = path_id("OrganizationApi.get", "org_id", org_id)?;

        self.client.get(&format!("org/{}", org_id)).await
    }

    /// Members of an organization, i.e. its administrators and staff.
    pub async fn members(&self, org_id: &str) -> ApiResult<Option<Value>> {
        let org_id = path_id("OrganizationApi.members", "org_id", org_id)?;

        self.client.get(&format!("org/{}/members", org_id)).await
    }

    /// App users enrolled through an organization.
    pub async fn users(&self, org_id: &str) -> ApiResult<Option<Value>> {
        let org_id = path_id("OrganizationApi.users", "org_id", org_id)?;

        self.client.get(&format!("org/{}/users", org_id)).await
    }
}
