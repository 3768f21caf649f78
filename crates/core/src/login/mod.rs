use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldRule, Schema};

/// Credentials for the development-only Cognito login endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct CognitoLoginRequest {
    pub username: String,
    pub password: String,
}

impl CognitoLoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl std::fmt::Debug for CognitoLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CognitoLoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub static COGNITO_LOGIN_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::object()
        .field("username", FieldRule::string().required())
        .field("password", FieldRule::string().required())
});
