#![allow(dead_code)]

use nestre::{AssessmentResponse, Client, ClientConfig, SubmitAssessmentRequest};
use nestre_core::assessment::ASSESSMENT_QUESTION_IDS;
use wiremock::{matchers::any, Mock, MockServer, ResponseTemplate};

/// Starts a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, Client) {
    let mock_server = MockServer::start().await;
    let client = Client::new(ClientConfig::new(mock_server.uri())).expect("valid config");
    (mock_server, client)
}

/// Fails the test on drop if any request reaches the server.
pub async fn expect_no_requests(mock_server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .named("no request may be dispatched")
        .mount(mock_server)
        .await;
}

pub fn full_assessment() -> SubmitAssessmentRequest {
    SubmitAssessmentRequest::new(
        ASSESSMENT_QUESTION_IDS.iter().map(|id| AssessmentResponse::new(*id, 4)).collect(),
    )
}
