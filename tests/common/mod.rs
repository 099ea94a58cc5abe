//! Shared helpers for driving the router in-process

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use employee_manager_backend::api;
use employee_manager_backend::config::{CredentialsConfig, ServerConfig, DEFAULT_CORS_ORIGIN};
use employee_manager_backend::services::CredentialService;
use employee_manager_backend::state::{AppState, SharedState};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

/// Seeded store with cheap hashing parameters
pub fn create_test_state() -> SharedState {
    let credentials = CredentialService::new(CredentialsConfig {
        memory_kib: 64,
        iterations: 1,
    })
    .unwrap();
    Arc::new(RwLock::new(AppState::seeded(credentials).unwrap()))
}

/// Full application router over the given state
pub fn create_app(state: SharedState) -> Router {
    let server = ServerConfig {
        port: 0,
        host: "127.0.0.1".to_string(),
        cors_allowed_origin: DEFAULT_CORS_ORIGIN.to_string(),
    };
    api::router(state, &server).unwrap()
}

/// Send one request and decode the JSON response body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).to_string(),
        ))
    };
    (status, value)
}
