use std::{env, time::Duration};

use nestre_core::SchemaViolation;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const API_URL_ENV: &str = "NESTRE_API_URL";
pub const API_VERSION_ENV: &str = "NESTRE_API_VERSION";
pub const AUTH_TOKEN_ENV: &str = "NESTRE_AUTH_TOKEN";
pub const TIMEOUT_SECS_ENV: &str = "NESTRE_TIMEOUT_SECS";

/// Connection settings for one API session.
#[derive(Clone, Default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Appended to `base_url` as a path segment, e.g. `v1`.
    pub api_version: Option<String>,
    pub auth_token: Option<String>,
    /// Transport timeout; no timeout when unset.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Default::default() }
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads the configuration from the environment.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// `NESTRE_API_URL` is required, `NESTRE_API_VERSION`, `NESTRE_AUTH_TOKEN`
    /// and `NESTRE_TIMEOUT_SECS` are optional.
    pub fn from_env() -> ApiResult<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var(API_URL_ENV)
            .map_err(|_| ApiSdkError::ConfigError(format!("{} is not set", API_URL_ENV)))?;

        let timeout = match non_empty_var(TIMEOUT_SECS_ENV) {
            Some(raw) => Some(Duration::from_secs(raw.parse::<u64>().map_err(|_| {
                ApiSdkError::ConfigError(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_SECS_ENV, raw
                ))
            })?)),
            None => None,
        };

        Ok(Self {
            base_url,
            api_version: non_empty_var(API_VERSION_ENV),
            auth_token: non_empty_var(AUTH_TOKEN_ENV),
            timeout,
        })
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// One entry of a server `detail` array: `{ loc, msg, type }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Error, Debug)]
pub enum ApiSdkError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("{context}: {message}")]
    InvalidArgument { context: &'static str, message: String },

    #[error("{context}: validation failed: {violation}")]
    SchemaValidation { context: &'static str, violation: SchemaViolation },

    #[error("Bad request (400): {message}")]
    BadRequest { message: String, details: Vec<ErrorDetail> },

    #[error("Unauthorized (401): {message}")]
    Unauthorized { message: String },

    #[error("Forbidden (403): {message}")]
    Forbidden { message: String },

    #[error("Not found (404): {message}")]
    NotFound { message: String, details: Vec<ErrorDetail> },

    #[error("Unprocessable entity (422): {message}")]
    Unprocessable { message: String, details: Vec<ErrorDetail> },

    #[error("Internal server error (500): {message}")]
    InternalServer { message: String, details: Vec<ErrorDetail> },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String, details: Vec<ErrorDetail> },
}

impl ApiSdkError {
    /// Maps an unsuccessful response to its typed error.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let (message, details) = parse_error_body(status, body);

        match status {
            StatusCode::BAD_REQUEST => ApiSdkError::BadRequest { message, details },
            StatusCode::UNAUTHORIZED => ApiSdkError::Unauthorized { message },
            StatusCode::FORBIDDEN => ApiSdkError::Forbidden { message },
            StatusCode::NOT_FOUND => ApiSdkError::NotFound { message, details },
            StatusCode::UNPROCESSABLE_ENTITY => ApiSdkError::Unprocessable { message, details },
            StatusCode::INTERNAL_SERVER_ERROR => ApiSdkError::InternalServer { message, details },
            _ => ApiSdkError::Api { status: status.as_u16(), message, details },
        }
    }

    /// HTTP status of a server-side failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiSdkError::BadRequest { .. } => Some(400),
            ApiSdkError::Unauthorized { .. } => Some(401),
            ApiSdkError::Forbidden { .. } => Some(403),
            ApiSdkError::NotFound { .. } => Some(404),
            ApiSdkError::Unprocessable { .. } => Some(422),
            ApiSdkError::InternalServer { .. } => Some(500),
            ApiSdkError::Api { status, .. } => Some(*status),
            ApiSdkError::HttpError(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Structured per-field issues mirrored from the server response.
    pub fn details(&self) -> &[ErrorDetail] {
        match self {
            ApiSdkError::BadRequest { details, .. }
            | ApiSdkError::NotFound { details, .. }
            | ApiSdkError::Unprocessable { details, .. }
            | ApiSdkError::InternalServer { details, .. }
            | ApiSdkError::Api { details, .. } => details,
            _ => &[],
        }
    }

    /// True when the call was rejected before anything was sent.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            ApiSdkError::InvalidArgument { .. }
                | ApiSdkError::SchemaValidation { .. }
                | ApiSdkError::ConfigError(_)
                | ApiSdkError::SerializationError(_)
        )
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<Value>,
}

fn parse_error_body(status: StatusCode, body: &[u8]) -> (String, Vec<ErrorDetail>) {
    let fallback = status.canonical_reason().unwrap_or("Unknown error").to_string();

    let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) else {
        return (fallback, Vec::new());
    };

    let mut detail_message = None;
    let details: Vec<ErrorDetail> = match parsed.detail {
        Some(Value::String(text)) => {
            detail_message = Some(text);
            Vec::new()
        }
        Some(Value::Array(items)) => {
            items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect()
        }
        Some(item @ Value::Object(_)) => serde_json::from_value(item).into_iter().collect(),
        _ => Vec::new(),
    };

    let message = parsed
        .message
        .filter(|message| !message.is_empty())
        .or(detail_message)
        .or_else(|| {
            (!details.is_empty()).then(|| {
                details.iter().map(|detail| detail.msg.as_str()).collect::<Vec<_>>().join("; ")
            })
        })
        .unwrap_or(fallback);

    (message, details)
}

pub type ApiResult<T> = Result<T, ApiSdkError>;
