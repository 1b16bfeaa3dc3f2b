use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use super::HealthResponse;
use crate::api::routes::AppState;
use crate::error::AppError;

/// Forward a text generation payload to the upstream model, relaying the
/// upstream's status and JSON body back to the caller unchanged.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Response, AppError> {
    let reply = state.upstream.generate(&payload).await?;
    Ok((reply.status, Json(reply.body)).into_response())
}

/// Same contract as `generate`, aimed at the text-to-speech endpoint.
pub async fn tts(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Response, AppError> {
    let reply = state.upstream.tts(&payload).await?;
    Ok((reply.status, Json(reply.body)).into_response())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
