//! Axum route handlers for the Sentiment API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::feedback::FeedbackResult;
use crate::sentiment::analyze_feedback;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub employee_feedback: String,
}

/// POST /sentiment
///
/// Body: `{"employee_feedback": "..."}`. Returns a `FeedbackResult`.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_sentiment(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResult>, AppError> {
    let Json(request) = payload?;
    if request.employee_feedback.trim().is_empty() {
        return Err(AppError::Input(
            "employee_feedback cannot be empty".to_string(),
        ));
    }

    info!(
        "Starting sentiment analysis ({} chars)",
        request.employee_feedback.len()
    );
    let result = analyze_feedback(state.llm.as_ref(), &request.employee_feedback).await?;
    Ok(Json(result))
}
