use std::sync::Arc;

use crate::config::Config;
use crate::jobs::catalog::JobCatalog;
use crate::jobs::matcher::JobMatcher;
use crate::resume::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Storage-backed job catalog. Default: PgJobCatalog.
    pub catalog: Arc<dyn JobCatalog>,
    /// Holds the salary model fitted at startup.
    pub matcher: Arc<JobMatcher>,
    /// Holds the text extractor and the skill vocabulary.
    pub resume_parser: Arc<ResumeParser>,
}
