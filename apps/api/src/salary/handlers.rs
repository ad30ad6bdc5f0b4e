//! Axum route handlers for the salary and job-market API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::salary::assembler::{check_profile, estimate_salary, SalaryEstimate};
use crate::salary::insights::{compute_market_insights, MarketInsights, MarketInsightsRequest};
use crate::salary::matching::{match_jobs, JobFilter};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub profile: CandidateProfile,
}

const DEFAULT_PAGE_LIMIT: usize = 100;

fn default_page_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

/// `?skip=&limit=` paging for list endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_page_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct JobMatchesResponse {
    pub data: Vec<JobPosting>,
    /// Total matches before paging.
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/salary/estimate
///
/// Recommended salary for the submitted profile, with its full breakdown.
/// An empty skill list or out-of-range proficiency is rejected before any database work.
pub async fn handle_estimate(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<SalaryEstimate>, AppError> {
    let profile = request.profile;
    check_profile(&profile)?;

    let jobs = state
        .store
        .search_jobs(&JobFilter::for_candidate(&profile))
        .await
        .map_err(AppError::Internal)?;
    let reference = state
        .store
        .reference_data(&profile)
        .await
        .map_err(AppError::Internal)?;

    let estimate = estimate_salary(&profile, &jobs, &reference, &state.policy)?;
    Ok(Json(estimate))
}

/// POST /api/v1/jobs/matches
///
/// Active postings matching the candidate's titles, location, job types and salary bounds,
/// one page at a time.
pub async fn handle_job_matches(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<JobMatchesResponse>, AppError> {
    let filter = JobFilter::for_candidate(&request.profile);
    let jobs = state
        .store
        .search_jobs(&filter)
        .await
        .map_err(AppError::Internal)?;

    let matched = match_jobs(&filter, &jobs);
    let count = matched.len();
    let data = matched
        .into_iter()
        .skip(page.skip)
        .take(page.limit)
        .cloned()
        .collect();

    Ok(Json(JobMatchesResponse { data, count }))
}

/// POST /api/v1/jobs/insights
pub async fn handle_market_insights(
    State(state): State<AppState>,
    Json(request): Json<MarketInsightsRequest>,
) -> Result<Json<MarketInsights>, AppError> {
    validate_insights_request(&request)?;

    let filter = request.to_filter();
    let jobs = state
        .store
        .search_jobs(&filter)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(compute_market_insights(&jobs, &filter)))
}

fn validate_insights_request(request: &MarketInsightsRequest) -> Result<(), AppError> {
    for (field, value) in [
        ("min_salary", request.min_salary),
        ("max_salary", request.max_salary),
    ] {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(AppError::Validation(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }
    }
    if let (Some(min), Some(max)) = (request.min_salary, request.max_salary) {
        if min > max {
            return Err(AppError::Validation(
                "min_salary cannot exceed max_salary".to_string(),
            ));
        }
    }
    Ok(())
}
