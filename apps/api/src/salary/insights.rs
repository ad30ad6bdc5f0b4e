//! Market insights over a filtered slice of the job corpus: average salary,
//! busiest companies, and job-type and salary-band distributions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::job::{JobPosting, JobStatus, JobType, WorkplaceType};
use crate::salary::matching::{match_jobs, JobFilter};

const TOP_COMPANIES: usize = 5;

/// (label, lower bound inclusive, upper bound exclusive) on the salary midpoint.
const SALARY_BANDS: &[(&str, f64, f64)] = &[
    ("<50k", 0.0, 50_000.0),
    ("50k-100k", 50_000.0, 100_000.0),
    ("100k-150k", 100_000.0, 150_000.0),
    ("150k-200k", 150_000.0, 200_000.0),
    ("200k+", 200_000.0, f64::INFINITY),
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketInsightsRequest {
    pub title: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub workplace_type: Option<WorkplaceType>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub status: Option<JobStatus>,
}

impl MarketInsightsRequest {
    pub fn to_filter(&self) -> JobFilter {
        JobFilter {
            status: self.status,
            titles: self
                .title
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            location: self
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            job_types: self.job_type.into_iter().collect(),
            workplace_type: self.workplace_type,
            salary_floor: self.min_salary,
            salary_ceiling: self.max_salary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopCompany {
    pub company_name: String,
    pub job_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobTypeCount {
    pub job_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryBandCount {
    pub range: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketInsights {
    /// Mean midpoint of postings with both salary bounds; `None` if there are none.
    pub average_salary: Option<f64>,
    pub total_jobs: usize,
    pub top_companies: Vec<TopCompany>,
    pub job_type_distribution: Vec<JobTypeCount>,
    pub salary_distribution: Vec<SalaryBandCount>,
}

pub fn compute_market_insights(jobs: &[JobPosting], filter: &JobFilter) -> MarketInsights {
    let selected = match_jobs(filter, jobs);

    let midpoints: Vec<f64> = selected
        .iter()
        .filter_map(|job| job.salary_midpoint())
        .collect();
    let average_salary = if midpoints.is_empty() {
        None
    } else {
        Some(midpoints.iter().sum::<f64>() / midpoints.len() as f64)
    };

    let mut companies: HashMap<&str, usize> = HashMap::new();
    let mut job_types: HashMap<JobType, usize> = HashMap::new();
    for job in &selected {
        if let Some(name) = job.company_name.as_deref().filter(|n| !n.is_empty()) {
            *companies.entry(name).or_default() += 1;
        }
        *job_types.entry(job.job_type).or_default() += 1;
    }

    let mut top_companies: Vec<TopCompany> = companies
        .into_iter()
        .map(|(name, job_count)| TopCompany {
            company_name: name.to_string(),
            job_count,
        })
        .collect();
    top_companies.sort_by(|a, b| {
        b.job_count
            .cmp(&a.job_count)
            .then_with(|| a.company_name.cmp(&b.company_name))
    });
    top_companies.truncate(TOP_COMPANIES);

    let mut job_type_distribution: Vec<JobTypeCount> = job_types
        .into_iter()
        .map(|(job_type, count)| JobTypeCount {
            job_type: job_type.to_string(),
            count,
        })
        .collect();
    job_type_distribution.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.job_type.cmp(&b.job_type))
    });

    let salary_distribution = SALARY_BANDS
        .iter()
        .filter_map(|(label, low, high)| {
            let count = midpoints.iter().filter(|m| **m >= *low && **m < *high).count();
            (count > 0).then(|| SalaryBandCount {
                range: label.to_string(),
                count,
            })
        })
        .collect();

    MarketInsights {
        average_salary,
        total_jobs: selected.len(),
        top_companies,
        job_type_distribution,
        salary_distribution,
    }
}
