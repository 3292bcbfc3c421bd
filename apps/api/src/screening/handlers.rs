//! Axum route handlers for the Screening API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::documents::extract_uploaded_pdf;
use crate::errors::AppError;
use crate::models::screening::{DetailedScreeningResult, ScreeningResult};
use crate::screening::{screen_resume, screen_resume_detailed};
use crate::state::AppState;

/// The validated contents of a screening form: `file` (PDF) and `text` (job description).
#[derive(Debug)]
pub struct ScreeningUpload {
    pub file_name: String,
    pub file_bytes: axum::body::Bytes,
    pub job_description: String,
}

/// Reads the multipart form, rejecting non-PDF uploads and missing fields.
pub async fn read_screening_form(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ScreeningUpload, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Input(e.body_text()))?;

    let mut file: Option<(String, axum::body::Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Input(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                if !file_name.to_lowercase().ends_with(".pdf") {
                    return Err(AppError::Input("Only PDF files are allowed".to_string()));
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Input(format!("Failed to read uploaded file: {e}")))?;
                file = Some((file_name, bytes));
            }
            "text" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Input(format!("Failed to read field 'text': {e}")))?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (file_name, file_bytes) =
        file.ok_or_else(|| AppError::Input("Missing required field 'file'".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Input("Missing required field 'text'".to_string()))?;

    if file_bytes.is_empty() {
        return Err(AppError::Input("Uploaded file is empty".to_string()));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Input("text cannot be empty".to_string()));
    }

    Ok(ScreeningUpload {
        file_name,
        file_bytes,
        job_description,
    })
}

/// POST /screening
///
/// Multipart form: `file` (PDF resume) + `text` (job description).
/// Returns a `ScreeningResult` with a 0–1 match score.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_screening(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ScreeningResult>, AppError> {
    let upload = read_screening_form(multipart).await?;
    info!("Received screening request for file: {}", upload.file_name);

    let resume = extract_uploaded_pdf(upload.file_bytes, state.config.pdf_page_mode).await?;
    info!("Extracted {} chars of resume text", resume.len());

    let result = screen_resume(state.llm.as_ref(), &resume, &upload.job_description).await?;
    Ok(Json(result))
}

/// POST /screening/detailed
///
/// Same input as `/screening`. Returns a `DetailedScreeningResult` with a 0–100 score.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_detailed_screening(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DetailedScreeningResult>, AppError> {
    let upload = read_screening_form(multipart).await?;
    info!("Received detailed screening request for file: {}", upload.file_name);

    let resume = extract_uploaded_pdf(upload.file_bytes, state.config.pdf_page_mode).await?;

    let result =
        screen_resume_detailed(state.llm.as_ref(), &resume, &upload.job_description).await?;
    Ok(Json(result))
}
