use nestre_core::login::COGNITO_LOGIN_SCHEMA;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{guard::checked_payload, http::HttpClient, types::ApiResult};

/// Response keys that may carry the issued bearer token.
const TOKEN_KEYS: [&str; 3] = ["access_token", "token", "id_token"];

#[derive(Debug, Clone)]
pub struct AuthenticationApi {
    client: Arc<HttpClient>,
}

impl AuthenticationApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Log an app user in through Cognito. Only available on development
    /// deployments. The response is returned untouched, see
    /// [`crate::Client::login_with_cognito`] to also install the token.
    pub async fn app_user_cognito_login<B>(&self, credentials: &B) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        let body = checked_payload(
            "AuthenticationApi.app_user_cognito_login",
            &COGNITO_LOGIN_SCHEMA,
            credentials,
        )?;

        self.client.post("dev/app-user-cognito-login", &body).await
    }
}

/// Pulls the bearer token out of a login response, which is either the token
/// itself as a JSON string or an object holding it.
pub(crate) fn token_from_login_response(response: &Value) -> Option<String> {
    let non_blank = |token: &str| {
        let token = token.trim();
        (!token.is_empty()).then(|| token.to_string())
    };

    match response {
        Value::String(token) => non_blank(token.as_str()),
        Value::Object(object) => TOKEN_KEYS
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str).and_then(non_blank)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_from_object() {
        let response = json!({ "access_token": "abc", "expires_in": 3600 });
        assert_eq!(token_from_login_response(&response).as_deref(), Some("abc"));

        let response = json!({ "token": "def" });
        assert_eq!(token_from_login_response(&response).as_deref(), Some("def"));

        let response = json!({ "access_token": "", "id_token": "jkl" });
        assert_eq!(token_from_login_response(&response).as_deref(), Some("jkl"));
    }

    #[test]
    fn test_token_as_plain_string() {
        assert_eq!(token_from_login_response(&json!("ghi")).as_deref(), Some("ghi"));
    }

    #[test]
    fn test_no_token() {
        assert!(token_from_login_response(&json!({ "status": "ok" })).is_none());
        assert!(token_from_login_response(&json!({ "access_token": "  " })).is_none());
        assert!(token_from_login_response(&json!(true)).is_none());
    }
}
