//! Resume Screening: resume text + job description → structured evaluation.
//!
//! Flow: build prompt → single completion call → extract JSON → validate/normalize.
//! The completion client is passed in; nothing here owns a connection.

pub mod handlers;
pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::models::screening::{DetailedScreeningResult, ScreeningResult};
use crate::screening::prompts::{DETAILED_SCREENING_PROMPT_TEMPLATE, SCREENING_PROMPT_TEMPLATE};
use crate::structured::prompt::build_prompt;
use crate::structured::schema::RecordSchema;
use crate::structured::{extract_record, StructuredRecord};

/// Low temperature: screening should be as repeatable as the model allows.
pub const SCREENING_TEMPERATURE: f32 = 0.1;

pub fn build_screening_prompt(
    template: &str,
    resume: &str,
    job_description: &str,
    schema: &RecordSchema,
) -> String {
    build_prompt(
        template,
        &[("job_description", job_description), ("resume", resume)],
        schema,
    )
}

/// Scores `resume` against `job_description` on a 0–1 scale.
pub async fn screen_resume(
    llm: &dyn CompletionClient,
    resume: &str,
    job_description: &str,
) -> Result<ScreeningResult, AppError> {
    let prompt = build_screening_prompt(
        SCREENING_PROMPT_TEMPLATE,
        resume,
        job_description,
        &ScreeningResult::SCHEMA,
    );
    let result: ScreeningResult = extract_record(llm, &prompt, SCREENING_TEMPERATURE).await?;
    info!(
        "Screening complete: match_score={:.2}, {} highlighted skill(s)",
        result.match_score,
        result.highlighted_skills.len()
    );
    Ok(result)
}

/// Detailed evaluation with a 0–100 score, matching/missing skills and prose assessments.
pub async fn screen_resume_detailed(
    llm: &dyn CompletionClient,
    resume: &str,
    job_description: &str,
) -> Result<DetailedScreeningResult, AppError> {
    let prompt = build_screening_prompt(
        DETAILED_SCREENING_PROMPT_TEMPLATE,
        resume,
        job_description,
        &DetailedScreeningResult::SCHEMA,
    );
    let result: DetailedScreeningResult =
        extract_record(llm, &prompt, SCREENING_TEMPERATURE).await?;
    info!(
        "Detailed screening complete: overallMatchScore={:.1}, {} missing skill(s)",
        result.overall_match_score,
        result.missing_skills.len()
    );
    Ok(result)
}
