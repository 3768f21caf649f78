//! Arguments and payloads are checked before anything is sent. Each test
//! mounts a catch-all mock that expects zero calls.

mod common;

use nestre::{
    ApiSdkError, AssessmentResponse, ContentInteraction, ContentType, CreateFrameRequest,
    FrameType, InteractionKind, ShortenUrlRequest, SubmitAssessmentRequest, UpdateFrameRequest,
    UserAssessmentFilters,
};
use serde_json::json;

use common::{expect_no_requests, full_assessment, setup};

#[tokio::test]
async fn test_blank_ids_are_rejected_without_a_request() {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    for user_id in ["", "   "] {
        let err = client.workout().daily_workout(user_id).await.unwrap_err();
        assert!(matches!(err, ApiSdkError::InvalidArgument { .. }));
        assert_eq!(
            err.to_string(),
            "WorkoutApi.daily_workout: Invalid user_id: must be a non-empty string"
        );
    }

    assert!(client.mental_framing().get("").await.is_err());
    assert!(client.cogex().get_cognitive_exercises(" ").await.is_err());
    assert!(client.assessment().get_randomized_questions("").await.is_err());
    assert!(client.frame().list("").await.is_err());
    assert!(client.organization().members("").await.is_err());
    assert!(client.search().profile_for_assessment("\t").await.is_err());

    let err = client.frame().get("u-1", "").await.unwrap_err();
    assert_eq!(err.to_string(), "FrameApi.get: Invalid frame_id: must be a non-empty string");

    let err = client.frame().delete("", "f-1").await.unwrap_err();
    assert_eq!(err.to_string(), "FrameApi.delete: Invalid user_id: must be a non-empty string");
}

#[tokio::test]
async fn test_non_positive_recommendation_counts_share_one_message() {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    let zero = client.content().recommendations("u-1", ContentType::Video, 0).await.unwrap_err();
    let negative =
        client.content().recommendations("u-1", ContentType::Video, -1).await.unwrap_err();

    assert_eq!(
        zero.to_string(),
        "ContentApi.recommendations: Invalid num_recommendations: must be a positive integer"
    );
    assert_eq!(zero.to_string(), negative.to_string());
    assert!(zero.is_client_side());
}

#[tokio::test]
async fn test_incomplete_assessment_is_rejected() {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    let partial = SubmitAssessmentRequest::new(vec![AssessmentResponse::new("sleep_1", 3)]);
    let err = client.assessment().submit("u-1", &partial).await.unwrap_err();

    assert!(matches!(err, ApiSdkError::SchemaValidation { .. }));
    assert_eq!(
        err.to_string(),
        "AssessmentApi.submit: validation failed: \"responses\" must contain 25 items"
    );
}

#[tokio::test]
async fn test_out_of_range_answer_names_the_item() {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    let mut submission = full_assessment();
    submission.responses[4].answer = 9;

    let err = client.assessment().submit("u-1", &submission).await.unwrap_err();
    let ApiSdkError::SchemaValidation { violation, .. } = err else {
        panic!("expected a schema violation, got {err:?}");
    };
    assert_eq!(violation.field, "responses[4].answer");
}

#[tokio::test]
async fn test_missing_required_field_is_rejected() {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    let err = client
        .frame()
        .create("u-1", &json!({ "frame_type": "gratitude" }))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "FrameApi.create: validation failed: \"title\" is required");

    let err = client
        .content()
        .record_interaction("u-1", ContentType::Audio, &json!({ "content_id": "a-1" }))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("\"interaction\" is required"));

    let err = client.cogex().record_cognitive_exercise_interaction("u-1", &json!({})).await;
    assert!(matches!(err, Err(ApiSdkError::SchemaValidation { .. })));
}

#[tokio::test]
async fn test_unknown_and_invalid_fields_are_rejected() {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    let err = client
        .frame()
        .create("u-1", &json!({ "title": "t", "frame_type": "gratitude", "mood": "ok" }))
        .await
        .unwrap_err();
    assert!(err.to_string().ends_with("\"mood\" is not allowed"));

    let err = client
        .frame()
        .create("u-1", &json!({ "title": "t", "frame_type": "rant" }))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("\"frame_type\" must be one of"));

    let long_title = "x".repeat(201);
    let err = client
        .frame()
        .create("u-1", &CreateFrameRequest::new(long_title, FrameType::Challenge))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("\"title\" length must be less than or equal to 200"));

    let interaction = ContentInteraction {
        rating: Some(6),
        ..ContentInteraction::new("v-1", InteractionKind::Liked)
    };
    let err = client
        .content()
        .record_interaction("u-1", ContentType::Video, &interaction)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("\"rating\" must be less than or equal to 5"));
}

#[tokio::test]
async fn test_empty_updates_and_filters_are_rejected() {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    let err = client
        .frame()
        .update("u-1", "f-1", &UpdateFrameRequest::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("must contain at least one of"));

    let filters = UserAssessmentFilters { limit: Some(5), ..Default::default() };
    let err = client.search().user_assessments(&filters).await.unwrap_err();
    assert!(matches!(err, ApiSdkError::SchemaValidation { .. }));
}

#[tokio::test]
async fn test_search_arguments_are_checked() {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    let no_ids: [&str; 0] = [];
    let err = client.search().assessments_with_responses(&no_ids).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "SearchApi.assessments_with_responses: Invalid assessment_ids: must contain at least one id"
    );

    let err = client.search().assessments_with_responses(&["a-1", " "]).await.unwrap_err();
    assert!(matches!(err, ApiSdkError::InvalidArgument { .. }));

    let err = client.search().assessments_with_responses(&["a-1", "a,b"]).await.unwrap_err();
    assert!(matches!(err, ApiSdkError::InvalidArgument { .. }));
    assert_eq!(
        err.to_string(),
        "SearchApi.assessments_with_responses: Invalid assessment_ids: an id must not contain ','"
    );

    let err = client
        .search()
        .latest_assessment_scores_for_group(&json!({ "user_ids": [] }))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("\"user_ids\" must contain at least 1 items"));
}

#[tokio::test]
async fn test_utility_payloads_are_checked() {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    let err = client
        .utility()
        .shorten_url(&ShortenUrlRequest::new("not a url"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "UtilityApi.shorten_url: validation failed: \"url\" must be a valid uri"
    );

    let err = client
        .utility()
        .log_client_error(&json!({ "message": "boom", "severity": "fatal" }))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("\"severity\" must be one of"));

    let err = client.utility().shorten_url(&json!({})).await.unwrap_err();
    assert!(err.to_string().ends_with("\"url\" is required"));

    let err = client.login_with_cognito(&json!({ "username": "ada" })).await.unwrap_err();
    assert!(err.to_string().contains("\"password\" is required"));
    assert!(client.auth_token().is_none());
}
