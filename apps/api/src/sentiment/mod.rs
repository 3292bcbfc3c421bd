//! Feedback Sentiment: employee feedback text → `FeedbackResult`.

pub mod handlers;
pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::models::feedback::FeedbackResult;
use crate::sentiment::prompts::FEEDBACK_PROMPT_TEMPLATE;
use crate::structured::prompt::build_prompt;
use crate::structured::{extract_record, StructuredRecord};

pub const FEEDBACK_TEMPERATURE: f32 = 0.3;

pub fn build_feedback_prompt(employee_feedback: &str) -> String {
    build_prompt(
        FEEDBACK_PROMPT_TEMPLATE,
        &[("employee_feedback", employee_feedback)],
        &FeedbackResult::SCHEMA,
    )
}

pub async fn analyze_feedback(
    llm: &dyn CompletionClient,
    employee_feedback: &str,
) -> Result<FeedbackResult, AppError> {
    let prompt = build_feedback_prompt(employee_feedback);
    let result: FeedbackResult = extract_record(llm, &prompt, FEEDBACK_TEMPERATURE).await?;
    info!(
        "Sentiment analysis complete: sentiment={:?}, score={:.2}",
        result.sentiment, result.sentiment_score
    );
    Ok(result)
}
