use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::api::{
    authentication::token_from_login_response, http::HttpClient, ApiResult, ApiSdkError,
    AssessmentApi, AuthenticationApi, ClientConfig, CogexApi, ContentApi, FrameApi, HealthApi,
    LookupApi, MentalFramingApi, OrganizationApi, SearchApi, UtilityApi, WorkoutApi,
};

static GLOBAL_CLIENT: OnceCell<Client> = OnceCell::new();

/// Entry point of the SDK.
///
/// Holds one session (base URL and bearer token) and a handle to every
/// resource API. All resource APIs share the same [`HttpClient`], so a token
/// set here is used by every subsequent call. Cloning is cheap and clones
/// share the session.
#[derive(Debug, Clone)]
pub struct Client {
    http: Arc<HttpClient>,
    assessment_api: AssessmentApi,
    authentication_api: AuthenticationApi,
    cogex_api: CogexApi,
    content_api: ContentApi,
    frame_api: FrameApi,
    health_api: HealthApi,
    lookup_api: LookupApi,
    mental_framing_api: MentalFramingApi,
    organization_api: OrganizationApi,
    search_api: SearchApi,
    utility_api: UtilityApi,
    workout_api: WorkoutApi,
}

impl Client {
    /// Create a client, fails when the base URL is missing or invalid.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = Arc::new(HttpClient::new(config)?);
        debug!(base_url = http.base_url(), "created Nestre API client");

        Ok(Self {
            assessment_api: AssessmentApi::new(Arc::clone(&http)),
            authentication_api: AuthenticationApi::new(Arc::clone(&http)),
            cogex_api: CogexApi::new(Arc::clone(&http)),
            content_api: ContentApi::new(Arc::clone(&http)),
            frame_api: FrameApi::new(Arc::clone(&http)),
            health_api: HealthApi::new(Arc::clone(&http)),
            lookup_api: LookupApi::new(Arc::clone(&http)),
            mental_framing_api: MentalFramingApi::new(Arc::clone(&http)),
            organization_api: OrganizationApi::new(Arc::clone(&http)),
            search_api: SearchApi::new(Arc::clone(&http)),
            utility_api: UtilityApi::new(Arc::clone(&http)),
            workout_api: WorkoutApi::new(Arc::clone(&http)),
            http,
        })
    }

    /// Create a client from `NESTRE_*` environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn set_auth_token(&self, token: impl Into<String>) {
        self.http.set_auth_token(token);
    }

    pub fn clear_auth_token(&self) {
        self.http.clear_auth_token();
    }

    pub fn auth_token(&self) -> Option<String> {
        self.http.auth_token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.http.auth_token().is_some()
    }

    /// Log in through the development Cognito endpoint and use the issued
    /// token for every following request.
    pub async fn login_with_cognito<B>(&self, credentials: &B) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        let response = self.authentication_api.app_user_cognito_login(credentials).await?;

        match response.as_ref().and_then(token_from_login_response) {
            Some(token) => {
                self.http.set_auth_token(token);
                info!("logged in, bearer token installed");
            }
            None => debug!("login response carried no token, auth token left unchanged"),
        }

        Ok(response)
    }

    /// Forget the session token.
    pub fn logout(&self) {
        self.http.clear_auth_token();
        info!("logged out");
    }

    pub fn assessment(&self) -> &AssessmentApi {
        &self.assessment_api
    }

    pub fn authentication(&self) -> &AuthenticationApi {
        &self.authentication_api
    }

    pub fn cogex(&self) -> &CogexApi {
        &self.cogex_api
    }

    pub fn content(&self) -> &ContentApi {
        &self.content_api
    }

    pub fn frame(&self) -> &FrameApi {
        &self.frame_api
    }

    pub fn lookup(&self) -> &LookupApi {
        &self.lookup_api
    }

    pub fn mental_framing(&self) -> &MentalFramingApi {
        &self.mental_framing_api
    }

    pub fn organization(&self) -> &OrganizationApi {
        &self.organization_api
    }

    pub fn search(&self) -> &SearchApi {
        &self.search_api
    }

    pub fn utility(&self) -> &UtilityApi {
        &self.utility_api
    }

    pub fn workout(&self) -> &WorkoutApi {
        &self.workout_api
    }

    pub async fn ping(&self) -> ApiResult<Option<Value>> {
        self.health_api.ping().await
    }
}

/// Create a new client
pub fn create_client(config: ClientConfig) -> ApiResult<Client> {
    Client::new(config)
}

/// Initialise the process-wide client. Can only succeed once.
pub fn init_global(config: ClientConfig) -> ApiResult<&'static Client> {
    let client = Client::new(config)?;
    GLOBAL_CLIENT.set(client).map_err(|_| {
        ApiSdkError::ConfigError("the global client has already been initialised".to_string())
    })?;

    global()
}

/// The process-wide client created by [`init_global`].
pub fn global() -> ApiResult<&'static Client> {
    GLOBAL_CLIENT.get().ok_or_else(|| {
        ApiSdkError::ConfigError(
            "the global client is not initialised, call init_global first".to_string(),
        )
    })
}
