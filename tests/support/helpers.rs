// tests/support/helpers.rs
use super::mocks;
use axum::body;
use axum::http::StatusCode;
use commentary_core::application::ports::events::EventPublisher;
use commentary_core::application::services::ApplicationServices;
use commentary_core::domain::comment::CommentRepository;
use commentary_core::domain::user::UserRepository;
use commentary_core::infrastructure::repositories::InMemoryCommentRepository;
use commentary_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Router plus handles on the fakes behind it.
pub struct TestApp {
    pub router: axum::Router,
    pub comments: Arc<InMemoryCommentRepository>,
    pub publisher: Arc<mocks::RecordingPublisher>,
}

pub fn build_services(
    comment_repo: Arc<dyn CommentRepository>,
    publisher: Arc<dyn EventPublisher>,
) -> ApplicationServices {
    let user_repo: Arc<dyn UserRepository> = Arc::new(mocks::InMemoryUserRepo::default());
    ApplicationServices::new(
        comment_repo,
        user_repo,
        publisher,
        Arc::new(mocks::SequentialIds::default()),
        Arc::new(mocks::SteppingClock::default()),
    )
}

pub fn build_test_state() -> (HttpState, Arc<InMemoryCommentRepository>, Arc<mocks::RecordingPublisher>) {
    let comments = Arc::new(InMemoryCommentRepository::new());
    let publisher = Arc::new(mocks::RecordingPublisher::default());
    let services = build_services(comments.clone(), publisher.clone());
    let state = HttpState {
        services: Arc::new(services),
    };
    (state, comments, publisher)
}

pub fn make_test_app() -> TestApp {
    let (state, comments, publisher) = build_test_state();
    TestApp {
        router: build_router(state, &[]),
        comments,
        publisher,
    }
}

pub fn make_test_router() -> axum::Router {
    make_test_app().router
}

/// Router over a working in-memory store and the given publisher.
pub fn make_router_with_publisher(
    publisher: Arc<dyn EventPublisher>,
) -> (axum::Router, Arc<InMemoryCommentRepository>) {
    let comments = Arc::new(InMemoryCommentRepository::new());
    let services = build_services(comments.clone(), publisher);
    let router = build_router(
        HttpState {
            services: Arc::new(services),
        },
        &[],
    );
    (router, comments)
}

/// Router whose comment store is always down.
pub fn make_failing_store_router() -> axum::Router {
    let services = build_services(
        Arc::new(mocks::FailingCommentRepo),
        Arc::new(mocks::RecordingPublisher::default()),
    );
    build_router(
        HttpState {
            services: Arc::new(services),
        },
        &[],
    )
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
