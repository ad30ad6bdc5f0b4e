use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::job::JobType;

/// Highest self-reported proficiency a candidate can claim for a skill.
pub const MAX_PROFICIENCY: u8 = 5;

/// A skill the candidate claims, with self-reported proficiency (0–5).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillAssessment {
    pub name: String,
    pub proficiency: u8,
}

/// Candidate salary ceiling as stored on the profile: either a plain amount or a
/// free-form range string such as `"80000-120000"` or `"$80k - $120k"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SalaryRange {
    Amount(f64),
    Text(String),
}

impl SalaryRange {
    /// The largest amount mentioned in the range, if any.
    pub fn ceiling(&self) -> Option<f64> {
        match self {
            SalaryRange::Amount(a) if a.is_finite() && *a >= 0.0 => Some(*a),
            SalaryRange::Amount(_) => None,
            SalaryRange::Text(text) => parse_amounts(text).into_iter().reduce(f64::max),
        }
    }
}

/// An amount with optional thousands separators and decimals, then an optional `k`.
/// Separators only count in groups of three, so `80000,120000` is two amounts.
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?)\s*([kK])?")
        .expect("amount pattern is valid")
});

/// Extracts every amount from a range string.
fn parse_amounts(text: &str) -> Vec<f64> {
    AMOUNT_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let value = caps[1].replace(',', "").parse::<f64>().ok()?;
            Some(if caps.get(2).is_some() { value * 1000.0 } else { value })
        })
        .collect()
}

/// The slice of a candidate profile the salary engine reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub key_skills: Vec<SkillAssessment>,
    pub location: Option<String>,
    #[serde(default)]
    pub industries_of_interest: Vec<String>,
    /// Comma-separated list of titles, as entered on the profile form.
    pub job_titles_of_interest: Option<String>,
    #[serde(default)]
    pub job_type_preferences: Vec<JobType>,
    pub minimum_acceptable_salary: Option<u64>,
    pub general_salary_range: Option<SalaryRange>,
}

impl CandidateProfile {
    /// Non-empty trimmed entries of `job_titles_of_interest`.
    pub fn titles_of_interest(&self) -> Vec<String> {
        self.job_titles_of_interest
            .as_deref()
            .map(|titles| {
                titles
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn salary_ceiling(&self) -> Option<f64> {
        self.general_salary_range.as_ref().and_then(SalaryRange::ceiling)
    }
}
