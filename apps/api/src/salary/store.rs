//! Data-store seam for the salary engine.
//!
//! `AppState` carries an `Arc<dyn SalaryDataStore>`; Postgres in production,
//! an in-memory corpus in tests.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::models::reference::ReferenceData;
use crate::salary::matching::JobFilter;
use crate::salary::repository;

#[async_trait]
pub trait SalaryDataStore: Send + Sync {
    /// Job postings matching `filter`. Implementations may over-approximate;
    /// callers re-apply `JobFilter::matches`.
    async fn search_jobs(&self, filter: &JobFilter) -> Result<Vec<JobPosting>>;

    /// Reference rows for the profile's skills, location and industries.
    async fn reference_data(&self, profile: &CandidateProfile) -> Result<ReferenceData>;
}

pub struct PgSalaryStore {
    pool: PgPool,
}

impl PgSalaryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalaryDataStore for PgSalaryStore {
    async fn search_jobs(&self, filter: &JobFilter) -> Result<Vec<JobPosting>> {
        repository::search_jobs(&self.pool, filter).await
    }

    async fn reference_data(&self, profile: &CandidateProfile) -> Result<ReferenceData> {
        repository::load_reference_data(&self.pool, profile).await
    }
}
