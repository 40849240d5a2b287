//! Axum route handlers for job matching.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::matcher::MatchResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub skills: Vec<String>,
}

/// POST /match-jobs
///
/// Ranks every catalog job by overlap with the given skills. Returns an empty
/// list when nothing overlaps.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    let jobs = state.catalog.all_jobs().await?;
    let matches = state.matcher.match_jobs(&request.skills, &jobs);

    info!(
        "Matched {} of {} jobs for {} candidate skills",
        matches.len(),
        jobs.len(),
        request.skills.len()
    );

    Ok(Json(matches))
}
