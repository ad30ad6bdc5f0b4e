//! Shared fixtures for salary engine tests.

use chrono::Utc;
use uuid::Uuid;

use crate::models::candidate::{CandidateProfile, SkillAssessment};
use crate::models::job::{JobPosting, JobStatus, JobType, WorkplaceType};
use crate::models::reference::{
    IndustryReference, LocationReference, ReferenceData, SkillReference,
};

pub fn make_job(
    title: &str,
    location: Option<&str>,
    salary: (Option<f64>, Option<f64>),
    job_type: JobType,
    status: JobStatus,
) -> JobPosting {
    JobPosting {
        id: Uuid::new_v4(),
        title: title.to_string(),
        location: location.map(str::to_string),
        salary_min: salary.0,
        salary_max: salary.1,
        status,
        job_type,
        workplace_type: WorkplaceType::Onsite,
        company_name: None,
        created_at: Utc::now(),
    }
}

pub fn skill(name: &str, proficiency: u8) -> SkillAssessment {
    SkillAssessment {
        name: name.to_string(),
        proficiency,
    }
}

/// Reference rows matching the estimator's reference scenario
/// (weights 1.3/1.1/1.5, premiums 3000/2500/4000, multiplier 1.1, trend 3%).
pub fn reference_data() -> ReferenceData {
    ReferenceData::new(
        vec![
            SkillReference {
                name: "Rust".to_string(),
                weight: 1.3,
                market_premium: 3000.0,
            },
            SkillReference {
                name: "PostgreSQL".to_string(),
                weight: 1.1,
                market_premium: 2500.0,
            },
            SkillReference {
                name: "Distributed Systems".to_string(),
                weight: 1.5,
                market_premium: 4000.0,
            },
        ],
        vec![
            LocationReference {
                city: "Berlin".to_string(),
                location_multiplier: Some(1.1),
            },
            LocationReference {
                city: "Leipzig".to_string(),
                location_multiplier: None,
            },
            LocationReference {
                city: "Dresden".to_string(),
                location_multiplier: Some(0.0),
            },
        ],
        vec![
            IndustryReference {
                industry: "FinTech".to_string(),
                trend_percentage: Some(3.0),
            },
            IndustryReference {
                industry: "Healthcare".to_string(),
                trend_percentage: Some(4.5),
            },
            IndustryReference {
                industry: "Retail".to_string(),
                trend_percentage: None,
            },
        ],
    )
}

pub fn candidate_profile() -> CandidateProfile {
    CandidateProfile {
        key_skills: vec![
            skill("Rust", 4),
            skill("PostgreSQL", 3),
            skill("Distributed Systems", 5),
        ],
        location: Some("Berlin".to_string()),
        industries_of_interest: vec!["FinTech".to_string()],
        job_titles_of_interest: Some("Backend Engineer".to_string()),
        ..Default::default()
    }
}

/// Five postings. Three are active Berlin backend roles that match
/// `candidate_profile`; two of those have both bounds, with midpoints averaging 85000.
pub fn job_corpus() -> Vec<JobPosting> {
    vec![
        make_job(
            "Senior Backend Engineer",
            Some("Berlin"),
            (Some(80000.0), Some(100000.0)),
            JobType::Fulltime,
            JobStatus::Active,
        ),
        make_job(
            "Backend Engineer",
            Some("Berlin"),
            (Some(70000.0), Some(90000.0)),
            JobType::Fulltime,
            JobStatus::Active,
        ),
        make_job(
            "Backend Engineer",
            Some("Berlin"),
            (None, Some(120000.0)),
            JobType::Contract,
            JobStatus::Active,
        ),
        make_job(
            "Backend Engineer",
            Some("Berlin"),
            (Some(200000.0), Some(240000.0)),
            JobType::Fulltime,
            JobStatus::Closed,
        ),
        make_job(
            "Data Analyst",
            Some("Berlin"),
            (Some(40000.0), Some(50000.0)),
            JobType::Parttime,
            JobStatus::Active,
        ),
    ]
}
