//! Job matching: which postings count as comparables for a candidate, and
//! the internal median `I` derived from them.

use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateProfile;
use crate::models::job::{JobPosting, JobStatus, JobType, WorkplaceType};

/// Filter over the job corpus. Empty/`None` fields do not constrain.
///
/// Also drives the SQL search in `repository::search_jobs`, so the database
/// and in-memory paths agree on what matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    /// A posting matches when its title contains any of these, case-insensitively.
    pub titles: Vec<String>,
    /// Case-insensitive substring of the posting location.
    pub location: Option<String>,
    pub job_types: Vec<JobType>,
    pub workplace_type: Option<WorkplaceType>,
    /// Excludes postings whose `salary_max` is below this.
    pub salary_floor: Option<f64>,
    /// Excludes postings whose `salary_min` is above this.
    pub salary_ceiling: Option<f64>,
}

impl JobFilter {
    /// Active postings matching the candidate's stated preferences.
    pub fn for_candidate(profile: &CandidateProfile) -> Self {
        Self {
            status: Some(JobStatus::Active),
            titles: profile.titles_of_interest(),
            location: profile
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            job_types: profile.job_type_preferences.clone(),
            workplace_type: None,
            salary_floor: profile.minimum_acceptable_salary.map(|m| m as f64),
            salary_ceiling: profile.salary_ceiling(),
        }
    }

    pub fn matches(&self, job: &JobPosting) -> bool {
        if let Some(status) = self.status {
            if job.status != status {
                return false;
            }
        }

        if !self.titles.is_empty() {
            let title = job.title.to_lowercase();
            if !self
                .titles
                .iter()
                .any(|t| title.contains(&t.to_lowercase()))
            {
                return false;
            }
        }

        if let Some(location) = &self.location {
            let wanted = location.to_lowercase();
            let found = job
                .location
                .as_deref()
                .map(|l| l.to_lowercase().contains(&wanted))
                .unwrap_or(false);
            if !found {
                return false;
            }
        }

        if !self.job_types.is_empty() && !self.job_types.contains(&job.job_type) {
            return false;
        }

        if let Some(workplace) = self.workplace_type {
            if job.workplace_type != workplace {
                return false;
            }
        }

        if let (Some(floor), Some(max)) = (self.salary_floor, job.salary_max) {
            if max < floor {
                return false;
            }
        }

        if let (Some(ceiling), Some(min)) = (self.salary_ceiling, job.salary_min) {
            if min > ceiling {
                return false;
            }
        }

        true
    }
}

pub fn match_jobs<'a>(filter: &JobFilter, jobs: &'a [JobPosting]) -> Vec<&'a JobPosting> {
    jobs.iter().filter(|job| filter.matches(job)).collect()
}

/// Integer (truncated) mean of the salary midpoints of postings that carry
/// both bounds; 0 when none do.
pub fn internal_median<'a>(jobs: impl IntoIterator<Item = &'a JobPosting>) -> f64 {
    let midpoints: Vec<f64> = jobs
        .into_iter()
        .filter_map(JobPosting::salary_midpoint)
        .collect();

    if midpoints.is_empty() {
        return 0.0;
    }

    let mean = midpoints.iter().sum::<f64>() / midpoints.len() as f64;
    mean.trunc()
}
