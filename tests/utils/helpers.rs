/// Test helper functions and service builders
use super::factories::TEST_JWT_SECRET;
use super::in_memory::InMemoryStore;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use movie_catalog_lib::commands::{build_router, AppState, Repositories};
use movie_catalog_lib::modules::identity::TokenDecoder;
use movie_catalog_lib::shared::config::AuthConfig;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub state: AppState,
    pub router: Router,
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        leeway_secs: 0,
    }
}

pub fn build_state(repositories: Repositories) -> AppState {
    AppState::new(repositories, TokenDecoder::new(&test_auth_config()))
}

/// Full application over the in-memory store
pub fn build_in_memory_app() -> TestApp {
    let store = InMemoryStore::new();
    let state = build_state(store.repositories());
    let router = build_router(state.clone());

    TestApp {
        store,
        state,
        router,
    }
}

/// Drive one request through the router and decode the JSON body.
/// Non-JSON bodies (extractor rejections) come back as a string value.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}
