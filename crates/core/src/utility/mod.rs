use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::{FieldRule, Schema};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenUrlRequest {
    pub url: String,
}

impl ShortenUrlRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSeverity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl ErrorSeverity {
    pub const ALL: [ErrorSeverity; 5] = [
        ErrorSeverity::Debug,
        ErrorSeverity::Info,
        ErrorSeverity::Warning,
        ErrorSeverity::Error,
        ErrorSeverity::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorSeverity::Debug => "debug",
            ErrorSeverity::Info => "info",
            ErrorSeverity::Warning => "warning",
            ErrorSeverity::Error => "error",
            ErrorSeverity::Critical => "critical",
        }
    }
}

/// A client-side failure forwarded to the server log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientErrorReport {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub severity: Option<ErrorSeverity>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stack: Option<String>,
    /// Free-form diagnostic context, keys are not checked.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub context: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub occurred_at: Option<DateTime<Utc>>,
}

impl ClientErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: None,
            stack: None,
            context: None,
            occurred_at: None,
        }
    }
}

pub static SHORTEN_URL_SCHEMA: Lazy<Schema> =
    Lazy::new(|| Schema::object().field("url", FieldRule::uri().required()));

pub static CLIENT_ERROR_REPORT_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::object()
        .field("message", FieldRule::string().required())
        .field(
            "severity",
            FieldRule::string().valid(&ErrorSeverity::ALL.map(ErrorSeverity::as_str)),
        )
        .field("stack", FieldRule::string())
        .field("context", FieldRule::map())
        .field("occurred_at", FieldRule::iso_date())
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shorten_url_requires_http_uri() {
        let err = SHORTEN_URL_SCHEMA
            .validate_payload(&ShortenUrlRequest { url: "nestre.io/page".to_string() })
            .unwrap_err();
        assert_eq!(err.to_string(), "\"url\" must be a valid uri");
    }

    #[test]
    fn test_report_with_context() {
        let mut report = ClientErrorReport::new("render failed");
        report.severity = Some(ErrorSeverity::Critical);
        report.context = json!({ "screen": "home", "attempt": 2 }).as_object().cloned();

        let value = CLIENT_ERROR_REPORT_SCHEMA.validate_payload(&report).unwrap();
        assert_eq!(value["severity"], "critical");
        assert_eq!(value["context"]["screen"], "home");
    }

    #[test]
    fn test_report_rejects_unknown_keys() {
        let err = CLIENT_ERROR_REPORT_SCHEMA
            .validate(&json!({ "message": "boom", "user": "ada" }))
            .unwrap_err();
        assert_eq!(err.to_string(), "\"user\" is not allowed");
    }
}
