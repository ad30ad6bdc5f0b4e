use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    Closed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Fulltime,
    Parttime,
    Internship,
    Contract,
    Temporary,
    Volunteer,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkplaceType {
    Onsite,
    Remote,
    Hybrid,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
        }
    }
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Fulltime => "fulltime",
            JobType::Parttime => "parttime",
            JobType::Internship => "internship",
            JobType::Contract => "contract",
            JobType::Temporary => "temporary",
            JobType::Volunteer => "volunteer",
            JobType::Other => "other",
        }
    }
}

impl WorkplaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkplaceType::Onsite => "onsite",
            WorkplaceType::Remote => "remote",
            WorkplaceType::Hybrid => "hybrid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for JobStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(JobStatus::Active),
            "closed" => Ok(JobStatus::Closed),
            other => Err(UnknownVariant {
                kind: "job status",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for JobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fulltime" => Ok(JobType::Fulltime),
            "parttime" => Ok(JobType::Parttime),
            "internship" => Ok(JobType::Internship),
            "contract" => Ok(JobType::Contract),
            "temporary" => Ok(JobType::Temporary),
            "volunteer" => Ok(JobType::Volunteer),
            "other" => Ok(JobType::Other),
            other => Err(UnknownVariant {
                kind: "job type",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for WorkplaceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "onsite" => Ok(WorkplaceType::Onsite),
            "remote" => Ok(WorkplaceType::Remote),
            "hybrid" => Ok(WorkplaceType::Hybrid),
            other => Err(UnknownVariant {
                kind: "workplace type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job posting as the salary engine sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub location: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub status: JobStatus,
    pub job_type: JobType,
    pub workplace_type: WorkplaceType,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    /// `(salary_min + salary_max) / 2`, only when both bounds are set.
    pub fn salary_midpoint(&self) -> Option<f64> {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => Some((min + max) / 2.0),
            _ => None,
        }
    }
}

/// Raw `job` row joined with the owning client's company name.
/// Enum columns are stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub location: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub status: String,
    pub job_type: String,
    pub workplace_type: String,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for JobPosting {
    type Error = UnknownVariant;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(JobPosting {
            id: row.id,
            title: row.title,
            location: row.location,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
            status: row.status.parse()?,
            job_type: row.job_type.parse()?,
            workplace_type: row.workplace_type.parse()?,
            company_name: row.company_name,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(status: &str, job_type: &str) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            location: Some("Berlin".to_string()),
            salary_min: Some(70000.0),
            salary_max: Some(90000.0),
            status: status.to_string(),
            job_type: job_type.to_string(),
            workplace_type: "hybrid".to_string(),
            company_name: Some("Acme".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_converts_text_enums() {
        let job = JobPosting::try_from(make_row("active", "contract")).unwrap();
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.job_type, JobType::Contract);
        assert_eq!(job.workplace_type, WorkplaceType::Hybrid);
    }

    #[test]
    fn test_row_with_unknown_status_is_rejected() {
        let err = JobPosting::try_from(make_row("archived", "fulltime")).unwrap_err();
        assert_eq!(err.kind, "job status");
        assert_eq!(err.value, "archived");
    }

    #[test]
    fn test_midpoint_requires_both_bounds() {
        let mut job = JobPosting::try_from(make_row("active", "fulltime")).unwrap();
        assert_eq!(job.salary_midpoint(), Some(80000.0));

        job.salary_max = None;
        assert_eq!(job.salary_midpoint(), None);
    }

    #[test]
    fn test_job_type_serde_is_snake_case() {
        let t: JobType = serde_json::from_str(r#""parttime""#).unwrap();
        assert_eq!(t, JobType::Parttime);
        assert_eq!(serde_json::to_string(&JobType::Temporary).unwrap(), r#""temporary""#);
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for t in [JobType::Fulltime, JobType::Volunteer, JobType::Other] {
            assert_eq!(t.as_str().parse::<JobType>().unwrap(), t);
        }
    }
}
