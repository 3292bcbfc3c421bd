use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::documents::DocumentError;
use crate::llm_client::LlmError;
use crate::structured::extractor::ExtractionError;
use crate::structured::schema::ValidationError;
use crate::structured::PipelineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant carries the original failure message through to the response body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Input(String),

    #[error("{0}")]
    Service(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Service(format!("Completion service failed: {e}"))
    }
}

impl From<DocumentError> for AppError {
    fn from(e: DocumentError) -> Self {
        match e {
            DocumentError::NoText => AppError::Input(e.to_string()),
            other => AppError::Service(other.to_string()),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Service(e) => e.into(),
            PipelineError::Extraction(e) => AppError::Extraction(e),
            PipelineError::Validation(e) => AppError::Validation(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Input(rejection.body_text())
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Input(_) => (StatusCode::BAD_REQUEST, "INPUT_ERROR"),
            AppError::Service(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SERVICE_ERROR"),
            AppError::Extraction(_) => (StatusCode::INTERNAL_SERVER_ERROR, "EXTRACTION_ERROR"),
            AppError::Validation(_) => (StatusCode::INTERNAL_SERVER_ERROR, "VALIDATION_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        match &self {
            AppError::Input(msg) => tracing::warn!("Rejected request: {msg}"),
            other => tracing::error!("{code}: {other}"),
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}
