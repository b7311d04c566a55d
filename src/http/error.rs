use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::StoreError;
use crate::ingest::IngestError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("database connection error: {0}")]
    Connection(String),

    #[error("error processing csv: {0}")]
    Ingest(#[from] IngestError),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Connection(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Connection(format!("blocking task failed: {e}"))
    }
}

pub fn detail(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "detail": message.into() }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(message) => detail(StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Connection(_) => {
                tracing::error!(error = %self, "request failed");
                detail(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database connection error",
                )
            }
            // Row-level detail stays in the server log.
            ApiError::Ingest(_) => {
                tracing::error!(error = %self, "upload rolled back");
                detail(StatusCode::INTERNAL_SERVER_ERROR, "Error processing CSV")
            }
        }
    }
}
