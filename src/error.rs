// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

// Maps each error onto the documented status + `{"error": ...}` body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidData(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Validation(ref e) => {
                tracing::debug!("Request validation failed: {}", e);
                (StatusCode::BAD_REQUEST, "Missing required data".to_string())
            },
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
