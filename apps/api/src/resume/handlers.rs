//! Axum route handlers for resume uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::resume::parser::ResumeParseResult;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";
const FALLBACK_FILENAME: &str = "resume.pdf";

/// POST /parse-resume
///
/// Accepts a multipart upload with a `file` field and returns the email and
/// skills found in it. Other fields are ignored.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeParseResult>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(FALLBACK_FILENAME)
            .to_string();
        let contents = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        info!("Received resume '{filename}' ({} bytes)", contents.len());

        let result = state.resume_parser.parse_upload(filename, contents).await?;
        return Ok(Json(result));
    }

    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}
