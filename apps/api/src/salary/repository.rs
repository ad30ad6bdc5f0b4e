//! Read-only Postgres queries feeding the salary engine.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::debug;

use crate::models::candidate::CandidateProfile;
use crate::models::job::{JobPosting, JobRow};
use crate::models::reference::{
    reference_key, IndustryReference, LocationReference, ReferenceData, SkillReference,
};
use crate::salary::matching::JobFilter;

/// Searches postings with `filter` pushed down into SQL.
pub async fn search_jobs(pool: &PgPool, filter: &JobFilter) -> Result<Vec<JobPosting>> {
    let title_patterns: Vec<String> = filter.titles.iter().map(|t| like_pattern(t)).collect();
    let location_pattern = filter.location.as_deref().map(like_pattern);
    let job_types: Vec<String> = filter
        .job_types
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();

    let rows = sqlx::query_as::<_, JobRow>(
        r#"
        SELECT j.id, j.title, j.location, j.salary_min, j.salary_max,
               j.status, j.job_type, j.workplace_type, c.company_name, j.created_at
        FROM job j
        LEFT JOIN client_profile c ON c.id = j.client_id
        WHERE ($1::text IS NULL OR j.status = $1)
          AND (cardinality($2::text[]) = 0 OR j.title ILIKE ANY($2))
          AND ($3::text IS NULL OR j.location ILIKE $3)
          AND (cardinality($4::text[]) = 0 OR j.job_type = ANY($4))
          AND ($5::text IS NULL OR j.workplace_type = $5)
          AND ($6::float8 IS NULL OR j.salary_max IS NULL OR j.salary_max >= $6)
          AND ($7::float8 IS NULL OR j.salary_min IS NULL OR j.salary_min <= $7)
        ORDER BY j.created_at DESC
        "#,
    )
    .bind(filter.status.map(|s| s.as_str()))
    .bind(&title_patterns)
    .bind(location_pattern)
    .bind(&job_types)
    .bind(filter.workplace_type.map(|w| w.as_str()))
    .bind(filter.salary_floor)
    .bind(filter.salary_ceiling)
    .fetch_all(pool)
    .await
    .context("Job search query failed")?;

    debug!("Job search returned {} rows", rows.len());

    rows.into_iter()
        .map(|row| JobPosting::try_from(row).context("Malformed job row"))
        .collect()
}

pub async fn fetch_skill_references(pool: &PgPool, names: &[String]) -> Result<Vec<SkillReference>> {
    let keys: Vec<String> = names.iter().map(|n| reference_key(n)).collect();
    Ok(sqlx::query_as::<_, SkillReference>(
        "SELECT name, weight, market_premium FROM skill WHERE lower(name) = ANY($1)",
    )
    .bind(&keys)
    .fetch_all(pool)
    .await?)
}

pub async fn fetch_location_reference(
    pool: &PgPool,
    city: &str,
) -> Result<Option<LocationReference>> {
    Ok(sqlx::query_as::<_, LocationReference>(
        "SELECT city, location_multiplier FROM location WHERE lower(city) = $1 LIMIT 1",
    )
    .bind(reference_key(city))
    .fetch_optional(pool)
    .await?)
}

pub async fn fetch_industry_references(
    pool: &PgPool,
    industries: &[String],
) -> Result<Vec<IndustryReference>> {
    let keys: Vec<String> = industries.iter().map(|i| reference_key(i)).collect();
    Ok(sqlx::query_as::<_, IndustryReference>(
        "SELECT industry, trend_percentage FROM industry WHERE lower(industry) = ANY($1)",
    )
    .bind(&keys)
    .fetch_all(pool)
    .await?)
}

/// Loads only the reference rows the profile can resolve against.
pub async fn load_reference_data(pool: &PgPool, profile: &CandidateProfile) -> Result<ReferenceData> {
    let skill_names: Vec<String> = profile.key_skills.iter().map(|s| s.name.clone()).collect();

    let skills = fetch_skill_references(pool, &skill_names)
        .await
        .context("Skill reference lookup failed")?;
    let location = match profile.location.as_deref() {
        Some(city) => fetch_location_reference(pool, city)
            .await
            .context("Location reference lookup failed")?,
        None => None,
    };
    let industries = fetch_industry_references(pool, &profile.industries_of_interest)
        .await
        .context("Industry reference lookup failed")?;

    Ok(ReferenceData::new(skills, location, industries))
}

/// `%text%` for ILIKE, with LIKE metacharacters escaped.
fn like_pattern(text: &str) -> String {
    let escaped = text
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
