use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Gemini API key not configured on server")]
    MissingApiKey,

    #[error("Error calling Google API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned {0} with an unreadable error body")]
    UpstreamBody(StatusCode),

    #[error("An internal server error occurred")]
    #[allow(dead_code)]
    Internal,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure class maps to 500; the upstream's own error statuses
        // are relayed by the handlers before an AppError is ever raised.
        let message = self.to_string();

        tracing::error!("Request failed: {}", message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: message }),
        )
            .into_response()
    }
}
