use chrono::{DateTime, SecondsFormat, Utc};
use nestre_core::utility::{CLIENT_ERROR_REPORT_SCHEMA, SHORTEN_URL_SCHEMA};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    guard::checked_payload,
    http::HttpClient,
    types::{ApiResult, ApiSdkError},
};

#[derive(Debug, Clone)]
pub struct UtilityApi {
    client: Arc<HttpClient>,
}

impl UtilityApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Shorten a URL. Resolves to the short URL.
    pub async fn shorten_url<B>(&self, request: &B) -> ApiResult<String>
    where
        B: Serialize + ?Sized,
    {
        const CONTEXT: &str = "UtilityApi.shorten_url";
        let body = checked_payload(CONTEXT, &SHORTEN_URL_SCHEMA, request)?;

        self.client.post("util/shorten-url", &body).await?.ok_or_else(|| empty_response(CONTEXT))
    }

    /// Whether `timestamp` falls after the start of the current Nestre day.
    pub async fn is_after_nestre_dawn(&self, timestamp: DateTime<Utc>) -> ApiResult<bool> {
        let timestamp = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);

        self.client
            .get_with_query("util/is-after-nestre-dawn", &[("timestamp", timestamp)])
            .await?
            .ok_or_else(|| empty_response("UtilityApi.is_after_nestre_dawn"))
    }

    /// Forward a client-side failure to the server log.
    pub async fn log_client_error<B>(&self, report: &B) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        let body =
            checked_payload("UtilityApi.log_client_error", &CLIENT_ERROR_REPORT_SCHEMA, report)?;

        self.client.post("util/log-client-error", &body).await
    }
}

fn empty_response(context: &str) -> ApiSdkError {
    ApiSdkError::SerializationError(format!("{}: expected a response body, got none", context))
}
