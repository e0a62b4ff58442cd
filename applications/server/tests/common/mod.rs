/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use roster_core::UserStore;
use roster_server::{create_router, services::UserService, state::AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Create a router over an empty store, returning the service for inspection
pub fn create_test_app() -> (Router, Arc<UserService>) {
    create_test_app_with(UserStore::new())
}

/// Create a router over a pre-populated store
pub fn create_test_app_with(store: UserStore) -> (Router, Arc<UserService>) {
    let users = Arc::new(UserService::new(store));
    let app = create_router(AppState::new(Arc::clone(&users)));
    (app, users)
}

/// Send a request with an empty body and decode the JSON response
pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, body)
}

/// Test fixtures
pub mod fixtures {
    pub const TEST_USERNAME: &str = "UrbanUser";
    pub const TEST_AGE: u8 = 24;
}
