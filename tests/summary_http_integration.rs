//! Integration tests for the summary HTTP endpoint.
//!
//! These tests wire the real pipeline handler (with the real DOCX
//! serializer) behind the Axum router, replacing only the network-facing
//! adapters with mocks, and drive it through `POST /api/summaries`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookscribe::adapters::access::PassphraseAccessChecker;
use bookscribe::adapters::ai::{MockCompletionProvider, MockResponse};
use bookscribe::adapters::document::DocxSerializer;
use bookscribe::adapters::drive::MockFileUploader;
use bookscribe::adapters::http::summary::{summary_routes, SummaryAppState};
use bookscribe::application::handlers::summary::{DeliveryOptions, GenerateSummaryHandler};

const SUMMARY_BODY: &str =
    "Intro\nA great book.\n\nChapter 1\n- Small habits compound\n- Identity over outcomes";

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    provider: MockCompletionProvider,
    uploader: MockFileUploader,
}

fn test_app(provider: MockCompletionProvider, uploader: MockFileUploader) -> TestApp {
    let handler = GenerateSummaryHandler::new(
        Arc::new(provider.clone()),
        Arc::new(DocxSerializer::new()),
        Arc::new(uploader.clone()),
        Arc::new(PassphraseAccessChecker::new("open sesame")),
        DeliveryOptions::new("folder-123")
            .with_convert_to("application/vnd.google-apps.document"),
    );

    TestApp {
        router: summary_routes(SummaryAppState::new(Arc::new(handler))),
        provider,
        uploader,
    }
}

async fn post_summary(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/summaries")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn valid_request() -> Value {
    json!({
        "title": "Atomic Habits",
        "notes": "habit loops, identity, compounding",
        "style": "narrative",
        "passphrase": "open sesame"
    })
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn submission_generates_uploads_and_cleans_up() {
    let app = test_app(
        MockCompletionProvider::new().with_response(SUMMARY_BODY),
        MockFileUploader::new(),
    );

    let (status, body) = post_summary(app.router, valid_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["file_id"], "mock-file-id");
    assert_eq!(body["file_name"], "Summary - Atomic Habits.docx");
    assert_eq!(
        body["web_link"],
        "https://drive.google.com/file/d/mock-file-id/view"
    );

    // The provider received the assembled prompt.
    let calls = app.provider.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].user_prompt.contains("\"Atomic Habits\""));

    // The upload carried the .docx and the conversion target, and the
    // transient file was removed after the submission.
    let uploads = app.uploader.uploads();
    assert_eq!(uploads.len(), 1);
    assert!(uploads[0].content_type.contains("wordprocessingml"));
    assert_eq!(
        uploads[0].convert_to.as_deref(),
        Some("application/vnd.google-apps.document")
    );
    assert!(!uploads[0].local_path.exists());
}

#[tokio::test]
async fn wrong_passphrase_is_unauthorized_and_nothing_runs() {
    let app = test_app(
        MockCompletionProvider::new().with_response(SUMMARY_BODY),
        MockFileUploader::new(),
    );

    let mut request = valid_request();
    request["passphrase"] = json!("let me in");
    let (status, body) = post_summary(app.router, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(app.provider.call_count(), 0);
    assert_eq!(app.uploader.upload_count(), 0);
}

#[tokio::test]
async fn passphrase_matches_case_insensitively() {
    let app = test_app(
        MockCompletionProvider::new().with_response(SUMMARY_BODY),
        MockFileUploader::new(),
    );

    let mut request = valid_request();
    request["passphrase"] = json!("  OPEN SESAME  ");
    let (status, _) = post_summary(app.router, request).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn blank_title_is_a_bad_request() {
    let app = test_app(
        MockCompletionProvider::new().with_response(SUMMARY_BODY),
        MockFileUploader::new(),
    );

    let mut request = valid_request();
    request["title"] = json!("   ");
    let (status, body) = post_summary(app.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(app.provider.call_count(), 0);
}

#[tokio::test]
async fn provider_failure_maps_to_bad_gateway() {
    let app = test_app(
        MockCompletionProvider::new()
            .with_mock_response(MockResponse::Unavailable("over capacity".to_string())),
        MockFileUploader::new(),
    );

    let (status, body) = post_summary(app.router, valid_request()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert_eq!(app.uploader.upload_count(), 0);
}

#[tokio::test]
async fn upload_failure_maps_to_bad_gateway_and_deletes_the_file() {
    let app = test_app(
        MockCompletionProvider::new().with_response(SUMMARY_BODY),
        MockFileUploader::failing("quota exceeded"),
    );

    let (status, body) = post_summary(app.router, valid_request()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");

    let uploads = app.uploader.uploads();
    assert_eq!(uploads.len(), 1);
    assert!(!uploads[0].local_path.exists());
}
