mod assessment;
pub(crate) mod authentication;
mod cogex;
mod content;
mod frame;
mod guard;
pub mod http;
mod lookup;
mod mental_framing;
mod organization;
mod search;
pub mod types;
mod utility;
mod workout;

use serde_json::Value;
use std::sync::Arc;

pub use assessment::AssessmentApi;
pub use authentication::AuthenticationApi;
pub use cogex::CogexApi;
pub use content::ContentApi;
pub use frame::FrameApi;
pub use lookup::LookupApi;
pub use mental_framing::MentalFramingApi;
pub use organization::OrganizationApi;
pub use search::SearchApi;
pub use types::{ApiResult, ApiSdkError, ClientConfig, ErrorDetail};
pub use utility::UtilityApi;
pub use workout::WorkoutApi;

use crate::api::http::HttpClient;

#[derive(Debug, Clone)]
pub struct HealthApi {
    client: Arc<HttpClient>,
}

impl HealthApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Liveness probe, needs no authentication.
    pub async fn ping(&self) -> ApiResult<Option<Value>> {
        self.client.get("ping").await
    }
}
