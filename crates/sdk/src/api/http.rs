use std::{
    fmt::Display,
    sync::{PoisonError, RwLock},
};

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, warn, Span};
use url::Url;

use crate::api::types::{ApiResult, ApiSdkError, ClientConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// The single point of network access shared by every resource API.
///
/// Owns the session configuration: the resolved endpoint root and the bearer
/// token. The token is read once when a request is built, so changing it
/// does not affect requests that are already in flight.
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth_token: RwLock<Option<String>>,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let base_url = resolve_base_url(&config)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            auth_token: RwLock::new(config.auth_token),
        })
    }

    /// The URL every endpoint is appended to, including the API version.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_auth_token(&self, token: impl Into<String>) {
        *self.auth_token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear_auth_token(&self) {
        *self.auth_token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn auth_token(&self) -> Option<String> {
        self.auth_token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn build_headers(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.auth_token() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ApiSdkError::ConfigError(
                    "auth token contains characters that are not allowed in a header".to_string(),
                )
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Sends one request and decodes the JSON response.
    ///
    /// Resolves to `None` for `204 No Content` and for empty bodies. Any
    /// status of 400 or above is mapped to the matching [`ApiSdkError`].
    #[instrument(
        name = "api_request",
        skip(self, query, body),
        fields(http.url = tracing::field::Empty, http.status_code = tracing::field::Empty)
    )]
    pub async fn request<T, Q, B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.build_url(endpoint);
        Span::current().record("http.url", url.as_str());

        let mut request = self.client.request(method.into(), &url).headers(self.build_headers()?);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!("dispatching request");
        let response = request.send().await?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        let bytes = response.bytes().await?;

        if !status.is_success() {
            let error = ApiSdkError::from_response(status, &bytes);
            if status.is_server_error() {
                warn!(error = %error, "request failed");
            } else {
                debug!(error = %error, "request rejected");
            }
            return Err(error);
        }

        if status == StatusCode::NO_CONTENT || bytes.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            ApiSdkError::SerializationError(format!(
                "could not decode response from {} {}: {}",
                method, endpoint, e
            ))
        })
    }

    pub async fn get<T>(&self, endpoint: &str) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.request::<T, (), ()>(HttpMethod::Get, endpoint, None, None).await
    }

    pub async fn get_with_query<T, Q>(&self, endpoint: &str, query: &Q) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request::<T, Q, ()>(HttpMethod::Get, endpoint, Some(query), None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, (), B>(HttpMethod::Post, endpoint, None, Some(body)).await
    }

    pub async fn patch<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, (), B>(HttpMethod::Patch, endpoint, None, Some(body)).await
    }

    pub async fn delete<T>(&self, endpoint: &str) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.request::<T, (), ()>(HttpMethod::Delete, endpoint, None, None).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.auth_token().is_some())
            .finish()
    }
}

fn resolve_base_url(config: &ClientConfig) -> ApiResult<String> {
    let base_url = config.base_url.trim();
    if base_url.is_empty() {
        return Err(ApiSdkError::ConfigError("base_url is required".to_string()));
    }

    let parsed = Url::parse(base_url).map_err(|e| {
        ApiSdkError::ConfigError(format!("base_url '{}' is not a valid URL: {}", base_url, e))
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiSdkError::ConfigError(format!(
            "base_url '{}' must use http or https",
            base_url
        )));
    }

    let mut root = base_url.trim_end_matches('/').to_string();
    if let Some(version) = config.api_version.as_deref().map(|v| v.trim_matches('/').trim()) {
        if !version.is_empty() {
            root.push('/');
            root.push_str(version);
        }
    }

    Ok(root)
}
