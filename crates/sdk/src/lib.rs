//! Rust SDK for the Nestre wellness platform API.
//!
//! ```no_run
//! use nestre::{Client, ClientConfig};
//!
//! # async fn run() -> nestre::ApiResult<()> {
//! let client = Client::new(
//!     ClientConfig::new("https://api.nestre.io").with_auth_token("my-token"),
//! )?;
//!
//! let genders = client.lookup().genders().await?;
//! let workout = client.workout().daily_workout("user-1").await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod clients;

pub use api::{
    http::{HttpClient, HttpMethod},
    ApiResult, ApiSdkError, AssessmentApi, AuthenticationApi, ClientConfig, CogexApi, ContentApi,
    ErrorDetail, FrameApi, HealthApi, LookupApi, MentalFramingApi, OrganizationApi, SearchApi,
    UtilityApi, WorkoutApi,
};
pub use clients::{create_client, global, init_global, Client};

pub use nestre_core::{
    assessment::{AssessmentResponse, SubmitAssessmentRequest},
    cogex::{CogexInteraction, CogexOutcome},
    content::{ContentInteraction, ContentType, InteractionKind},
    frame::{CreateFrameRequest, FrameType, UpdateFrameRequest},
    login::CognitoLoginRequest,
    search::{GroupScoresRequest, UserAssessmentFilters},
    utility::{ClientErrorReport, ErrorSeverity, ShortenUrlRequest},
    SchemaViolation,
};
