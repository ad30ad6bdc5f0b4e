//! Input Assembler: resolves a candidate profile against the job corpus and
//! the skill/location/industry reference tables, producing the numeric
//! inputs the estimator consumes.
//!
//! Fails fast with `MissingReferenceData` when the profile cannot be resolved.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::candidate::{CandidateProfile, MAX_PROFICIENCY};
use crate::models::job::JobPosting;
use crate::models::reference::{reference_key, ReferenceData};
use crate::salary::error::{EstimateError, MissingReference};
use crate::salary::estimator::{estimate, CandidateFactors, EstimationInputs, SalaryBreakdown};
use crate::salary::matching::{internal_median, match_jobs, JobFilter};
use crate::salary::policy::SalaryPolicy;

/// A candidate skill joined with its reference row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillFactor {
    pub name: String,
    pub proficiency: f64,
    pub weight: f64,
    pub market_premium: f64,
}

/// Everything the estimator needs plus what was resolved along the way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssembledInputs {
    pub inputs: EstimationInputs,
    pub skills: Vec<SkillFactor>,
    /// Candidate skills with no reference row; they do not contribute.
    pub unreferenced_skills: Vec<String>,
    pub matched_jobs: usize,
}

/// Result returned to callers of `estimate_salary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryEstimate {
    pub recommended_salary: f64,
    pub internal_median: f64,
    pub matched_jobs: usize,
    pub skills: Vec<SkillFactor>,
    pub unreferenced_skills: Vec<String>,
    pub breakdown: SalaryBreakdown,
    pub policy_version: String,
    pub computed_at: DateTime<Utc>,
}

/// Checks the parts of the profile that need no lookups: at least one skill,
/// every proficiency in range. Location and industries are left to their lookups
/// so failures are reported skills first, then location, then industries.
pub fn check_profile(profile: &CandidateProfile) -> Result<(), EstimateError> {
    if profile.key_skills.is_empty() {
        return Err(missing(MissingReference::KeySkills));
    }

    if let Some(bad) = profile
        .key_skills
        .iter()
        .find(|s| s.proficiency > MAX_PROFICIENCY)
    {
        return Err(EstimateError::InvalidInput(format!(
            "proficiency for '{}' must be between 0 and {MAX_PROFICIENCY}, got {}",
            bad.name, bad.proficiency
        )));
    }

    Ok(())
}

pub fn assemble_inputs(
    profile: &CandidateProfile,
    jobs: &[JobPosting],
    reference: &ReferenceData,
    policy: &SalaryPolicy,
) -> Result<AssembledInputs, EstimateError> {
    check_profile(profile)?;

    let (skills, unreferenced_skills) = join_skills(profile, reference)?;
    if skills.is_empty() {
        return Err(missing(MissingReference::KeySkills));
    }

    let location_multiplier = location_multiplier(profile, reference, policy)?;
    let trend_percentage = trend_percentage(profile, reference, policy)?;

    let matched = match_jobs(&JobFilter::for_candidate(profile), jobs);
    let median = internal_median(matched.iter().copied());
    debug!(
        "Matched {} of {} postings, internal median {median}",
        matched.len(),
        jobs.len()
    );

    let factors = CandidateFactors {
        internal_median: median,
        skill_proficiency: skills.iter().map(|s| s.proficiency).collect(),
        skill_weights: skills.iter().map(|s| s.weight).collect(),
        market_premiums: skills.iter().map(|s| s.market_premium).collect(),
        location_multiplier,
        trend_percentage,
    };

    Ok(AssembledInputs {
        inputs: EstimationInputs::new(factors, policy),
        skills,
        unreferenced_skills,
        matched_jobs: matched.len(),
    })
}

/// Estimates a salary for one candidate from already-fetched jobs and reference data.
pub fn estimate_salary(
    profile: &CandidateProfile,
    jobs: &[JobPosting],
    reference: &ReferenceData,
    policy: &SalaryPolicy,
) -> Result<SalaryEstimate, EstimateError> {
    let assembled = assemble_inputs(profile, jobs, reference, policy)?;
    let breakdown = estimate(&assembled.inputs)?;

    info!(
        "Salary estimate {:.2} (I={}, {} skills, {} matched jobs, policy {})",
        breakdown.final_salary,
        assembled.inputs.internal_median,
        assembled.skills.len(),
        assembled.matched_jobs,
        policy.version
    );

    Ok(SalaryEstimate {
        recommended_salary: breakdown.final_salary,
        internal_median: assembled.inputs.internal_median,
        matched_jobs: assembled.matched_jobs,
        skills: assembled.skills,
        unreferenced_skills: assembled.unreferenced_skills,
        breakdown,
        policy_version: policy.version.clone(),
        computed_at: Utc::now(),
    })
}

/// Reference weights, premiums, multipliers and trends must be finite and non-negative.
fn reference_value(row: &str, field: &str, value: f64) -> Result<f64, EstimateError> {
    if value.is_finite() && value >= 0.0 {
        return Ok(value);
    }
    warn!("Rejecting reference {field} {value} for '{row}'");
    Err(EstimateError::InvalidInput(format!(
        "reference {field} for '{row}' must be a non-negative number, got {value}"
    )))
}

fn missing(what: MissingReference) -> EstimateError {
    warn!("Cannot estimate salary: {what}");
    EstimateError::MissingReferenceData(what)
}

/// Joins candidate skills to reference rows by name. The first occurrence of a
/// duplicated skill wins; candidate order is kept.
fn join_skills(
    profile: &CandidateProfile,
    reference: &ReferenceData,
) -> Result<(Vec<SkillFactor>, Vec<String>), EstimateError> {
    let mut seen = HashSet::new();
    let mut joined = Vec::new();
    let mut unreferenced = Vec::new();

    for assessment in &profile.key_skills {
        if !seen.insert(reference_key(&assessment.name)) {
            continue;
        }
        match reference.skill(&assessment.name) {
            Some(row) => joined.push(SkillFactor {
                name: row.name.clone(),
                proficiency: f64::from(assessment.proficiency),
                weight: reference_value(&row.name, "weight", row.weight)?,
                market_premium: reference_value(
                    &row.name,
                    "market_premium",
                    row.market_premium,
                )?,
            }),
            None => unreferenced.push(assessment.name.clone()),
        }
    }

    Ok((joined, unreferenced))
}

fn location_multiplier(
    profile: &CandidateProfile,
    reference: &ReferenceData,
    policy: &SalaryPolicy,
) -> Result<f64, EstimateError> {
    let row = profile
        .location
        .as_deref()
        .and_then(|city| reference.location(city))
        .ok_or_else(|| missing(MissingReference::Location))?;

    match row.location_multiplier.filter(|m| *m != 0.0) {
        Some(m) => reference_value(&row.city, "location_multiplier", m),
        None => Ok(policy.default_location_multiplier),
    }
}

/// Trend of the first industry of interest that has a reference row.
fn trend_percentage(
    profile: &CandidateProfile,
    reference: &ReferenceData,
    policy: &SalaryPolicy,
) -> Result<f64, EstimateError> {
    let row = profile
        .industries_of_interest
        .iter()
        .find_map(|industry| reference.industry(industry))
        .ok_or_else(|| missing(MissingReference::IndustriesOfInterest))?;

    match row.trend_percentage.filter(|t| *t != 0.0) {
        Some(t) => reference_value(&row.industry, "trend_percentage", t),
        None => Ok(policy.default_trend_percentage),
    }
}
