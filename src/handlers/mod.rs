//! HTTP handlers for the backend API.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::startup::AppState;

/// Greeting endpoint consumed by the frontend landing page.
pub async fn hello(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let message = state.greeter.greeting().await?;
    Ok(Json(json!({ "message": message })))
}

/// Echo endpoint: returns the posted JSON body unchanged under `received`.
pub async fn echo(Json(payload): Json<Value>) -> Json<Value> {
    Json(json!({ "received": payload }))
}

/// Health check endpoint for liveness probes.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "hackutd-backend",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check endpoint.
pub async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ready" })))
}
