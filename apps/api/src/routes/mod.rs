pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as job_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/parse-resume", post(resume_handlers::handle_parse_resume))
        .route("/match-jobs", post(job_handlers::handle_match_jobs))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
