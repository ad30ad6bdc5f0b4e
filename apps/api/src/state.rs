use std::sync::Arc;

use crate::salary::policy::SalaryPolicy;
use crate::salary::store::SalaryDataStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Versioned policy constants, validated at startup.
    pub policy: Arc<SalaryPolicy>,
    /// Pluggable data store. Default: PgSalaryStore.
    pub store: Arc<dyn SalaryDataStore>,
}
