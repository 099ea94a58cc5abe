//! API module
//!
//! Contains HTTP request handlers for manager and employee endpoints,
//! plus the router that wires them together.

pub mod employees;
pub mod managers;
pub mod middleware;
pub mod utils;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::any::Any as PanicPayload;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Human-readable message
    pub message: String,
}

/// GET /api/health - Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Backend is healthy".to_string(),
    })
}

/// Build the API routes without middleware
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/health", get(health_check))
        // Manager API
        .route("/api/manager/all", get(managers::list_managers))
        .route("/api/manager/register", post(managers::register_manager))
        .route("/api/manager/login", post(managers::login_manager))
        // Employee API
        .route("/api/employee/all", get(employees::list_employees))
        .route("/api/employee/create", post(employees::create_employee))
        .route(
            "/api/employee/manager/:id",
            get(employees::list_employees_by_manager),
        )
        .route("/api/employee/update/:id", put(employees::update_employee))
        .route(
            "/api/employee/delete/:id",
            delete(employees::delete_employee),
        )
        .route("/api/employee/search", get(employees::search_employees))
}

/// CORS policy for the configured frontend origin
///
/// `*` allows any origin. Any other value must be a valid header value.
pub fn cors_layer(server: &ServerConfig) -> anyhow::Result<CorsLayer> {
    if server.cors_allowed_origin == "*" {
        return Ok(CorsLayer::permissive());
    }
    let origin = server
        .cors_allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| {
            anyhow::anyhow!(
                "Invalid CORS origin {:?}: {}",
                server.cors_allowed_origin,
                e
            )
        })?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Turn a handler panic into the generic 500 response
fn handle_panic(panic: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(anyhow::anyhow!("Handler panicked: {}", detail)).into_response()
}

/// Wrap routes in the middleware stack (panic guard, request id, tracing, CORS)
pub fn with_middleware(
    routes: Router<SharedState>,
    server: &ServerConfig,
) -> anyhow::Result<Router<SharedState>> {
    Ok(routes
        // Middleware (order matters - panics are caught before request_id sees the response)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(cors_layer(server)?))
}

/// Build the full application: routes, middleware and shared state
pub fn router(state: SharedState, server: &ServerConfig) -> anyhow::Result<Router> {
    Ok(with_middleware(routes(), server)?.with_state(state))
}
