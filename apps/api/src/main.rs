mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod resume;
mod routes;
mod salary;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::jobs::catalog::PgJobCatalog;
use crate::jobs::matcher::JobMatcher;
use crate::resume::parser::ResumeParser;
use crate::resume::skills::{SkillExtractor, SkillVocabulary};
use crate::resume::text_extractor::PdfTextExtractor;
use crate::routes::build_router;
use crate::salary::SalaryEstimator;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Portal API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    let catalog = Arc::new(PgJobCatalog::new(db));

    // Fit the salary model once; it is read-only from here on
    let salary = Arc::new(SalaryEstimator::reference());
    if let Some(fit) = salary.fit() {
        info!(
            "Salary model fitted: slope={:.3} intercept={:.3}",
            fit.slope, fit.intercept
        );
    }

    let vocabulary = Arc::new(SkillVocabulary::default());
    if vocabulary.is_empty() {
        warn!("Skill vocabulary is empty; resumes will report no skills");
    }
    let skills = SkillExtractor::new(vocabulary.clone(), config.skill_match_mode);
    info!(
        "Skill vocabulary loaded: {} entries, {:?} matching",
        vocabulary.len(),
        skills.mode()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog,
        matcher: Arc::new(JobMatcher::new(salary)),
        resume_parser: Arc::new(ResumeParser::new(Arc::new(PdfTextExtractor), skills)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the frontend host once it is deployed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
