//! Resume parsing pipeline: temp copy → text → email + skills.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::resume::contact::extract_email;
use crate::resume::skills::SkillExtractor;
use crate::resume::text_extractor::{ExtractionError, TextExtractor};

#[derive(Debug, Clone, Serialize)]
pub struct ResumeParseResult {
    pub filename: String,
    pub extracted_email: Option<String>,
    pub extracted_skills: Vec<String>,
}

pub struct ResumeParser {
    extractor: Arc<dyn TextExtractor>,
    skills: SkillExtractor,
}

impl ResumeParser {
    pub fn new(extractor: Arc<dyn TextExtractor>, skills: SkillExtractor) -> Self {
        Self { extractor, skills }
    }

    /// Parses an uploaded document.
    ///
    /// The upload is spooled to a `NamedTempFile` that lives only inside the
    /// blocking task; it is removed when the task finishes, whether extraction
    /// succeeded, failed or panicked.
    pub async fn parse_upload(
        &self,
        filename: String,
        contents: Bytes,
    ) -> Result<ResumeParseResult, AppError> {
        let extractor = Arc::clone(&self.extractor);
        let suffix = temp_suffix(&filename);

        let text = tokio::task::spawn_blocking(move || -> Result<String, AppError> {
            let mut temp = tempfile::Builder::new()
                .prefix("resume_")
                .suffix(&suffix)
                .tempfile()
                .map_err(|e| {
                    AppError::Extraction(format!("Failed to create temporary upload file: {e}"))
                })?;
            temp.write_all(&contents)
                .and_then(|_| temp.flush())
                .map_err(|e| {
                    AppError::Extraction(format!("Failed to write temporary upload file: {e}"))
                })?;

            extractor.extract(temp.path()).map_err(AppError::from)
        })
        .await
        .map_err(|e| AppError::Extraction(format!("Resume extraction task failed: {e}")))??;

        debug!("Extracted {} characters from '{filename}'", text.len());

        let extracted_email = extract_email(&text);
        let extracted_skills = self.skills.extract(&text);

        info!(
            "Parsed resume '{filename}': email={}, {} skills",
            extracted_email.is_some(),
            extracted_skills.len()
        );

        Ok(ResumeParseResult {
            filename,
            extracted_email,
            extracted_skills,
        })
    }
}

impl From<ExtractionError> for AppError {
    fn from(e: ExtractionError) -> Self {
        AppError::Extraction(e.to_string())
    }
}

/// Keeps the upload's extension on the temp file, e.g. `.pdf`.
fn temp_suffix(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
