//! Document Loader: plain text from uploaded PDF resumes.
//!
//! PDF decoding is CPU-bound and can panic on malformed input, so it always
//! runs on the blocking pool; a panic there surfaces as `DocumentError::Extraction`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Resume not found at: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to stage uploaded file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to extract text from PDF: {0}")]
    Extraction(String),

    #[error("PDF contains no extractable text")]
    NoText,
}

/// Which pages of the PDF contribute to the extracted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageMode {
    #[default]
    FirstPage,
    AllPages,
}

impl FromStr for PageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first_page" => Ok(PageMode::FirstPage),
            "all" | "all_pages" => Ok(PageMode::AllPages),
            other => Err(format!("unknown page mode '{other}' (expected 'first' or 'all')")),
        }
    }
}

/// Reads the PDF at `path` and returns its text according to `mode`.
/// Blocking; async callers go through `extract_uploaded_pdf`.
pub fn load_pdf_text(path: &Path, mode: PageMode) -> Result<String, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }

    let pages = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| DocumentError::Extraction(e.to_string()))?;
    debug!("Extracted {} page(s) from {}", pages.len(), path.display());

    let text = match mode {
        PageMode::FirstPage => pages.into_iter().next().unwrap_or_default(),
        PageMode::AllPages => pages.join("\n\n"),
    };

    if text.trim().is_empty() {
        return Err(DocumentError::NoText);
    }
    Ok(text)
}

/// Stages uploaded bytes in a temporary `.pdf` file, extracts its text, and
/// removes the file again whether or not extraction succeeded.
pub async fn extract_uploaded_pdf<B>(bytes: B, mode: PageMode) -> Result<String, DocumentError>
where
    B: AsRef<[u8]> + Send + 'static,
{
    tokio::task::spawn_blocking(move || -> Result<String, DocumentError> {
        let mut staged = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(".pdf")
            .tempfile()?;
        staged.write_all(bytes.as_ref())?;
        staged.flush()?;
        info!("Staged upload at {}", staged.path().display());

        // `staged` is dropped (and the file deleted) when this closure returns.
        load_pdf_text(staged.path(), mode)
    })
    .await
    .map_err(|e| DocumentError::Extraction(format!("PDF decoder aborted: {e}")))?
}
