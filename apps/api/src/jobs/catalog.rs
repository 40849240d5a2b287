//! Read-only access to the job catalog.
//!
//! `AppState` holds an `Arc<dyn JobCatalog>`; production uses `PgJobCatalog`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::JobRow;

#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// Every job, in storage order.
    async fn all_jobs(&self) -> Result<Vec<JobRow>, AppError>;
}

pub struct PgJobCatalog {
    pool: PgPool,
}

impl PgJobCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobCatalog for PgJobCatalog {
    async fn all_jobs(&self) -> Result<Vec<JobRow>, AppError> {
        // SELECT * so that deployments without a min_experience column still load.
        let jobs = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        debug!("Loaded {} jobs from catalog", jobs.len());
        Ok(jobs)
    }
}

/// Fixed in-process catalog.
#[cfg(test)]
pub struct InMemoryJobCatalog {
    jobs: Vec<JobRow>,
}

#[cfg(test)]
impl InMemoryJobCatalog {
    pub fn new(jobs: Vec<JobRow>) -> Self {
        Self { jobs }
    }
}

#[cfg(test)]
#[async_trait]
impl JobCatalog for InMemoryJobCatalog {
    async fn all_jobs(&self) -> Result<Vec<JobRow>, AppError> {
        Ok(self.jobs.clone())
    }
}
