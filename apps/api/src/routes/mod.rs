pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::salary::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/salary/estimate", post(handlers::handle_estimate))
        .route("/api/v1/jobs/matches", post(handlers::handle_job_matches))
        .route("/api/v1/jobs/insights", post(handlers::handle_market_insights))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::salary::policy::SalaryPolicy;
    use crate::salary::store::memory::InMemorySalaryStore;
    use crate::salary::test_support::{job_corpus, reference_data};

    fn app() -> Router {
        build_router(AppState {
            policy: Arc::new(SalaryPolicy::default()),
            store: Arc::new(InMemorySalaryStore {
                jobs: job_corpus(),
                reference: reference_data(),
            }),
        })
    }

    async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn profile() -> Value {
        json!({
            "key_skills": [
                {"name": "Rust", "proficiency": 4},
                {"name": "PostgreSQL", "proficiency": 3},
                {"name": "Distributed Systems", "proficiency": 5}
            ],
            "location": "Berlin",
            "industries_of_interest": ["FinTech"],
            "job_titles_of_interest": "Backend Engineer"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_estimate_returns_recommendation_and_breakdown() {
        let (status, body) = post_json("/api/v1/salary/estimate", json!({"profile": profile()})).await;

        assert_eq!(status, StatusCode::OK, "body: {body}");
        assert_eq!(body["recommended_salary"], json!(196778.92500000002));
        assert_eq!(body["internal_median"], json!(85000.0));
        assert_eq!(body["matched_jobs"], json!(3));
        assert_eq!(body["breakdown"]["subtotal"], json!(181950.0));
        assert_eq!(body["policy_version"], json!("default-v1"));
    }

    #[tokio::test]
    async fn test_estimate_without_skills_is_422() {
        let mut profile = profile();
        profile["key_skills"] = json!([]);
        let (status, body) = post_json("/api/v1/salary/estimate", json!({"profile": profile})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], json!("UNPROCESSABLE_ENTITY"));
        assert_eq!(
            body["error"]["message"],
            json!("candidate key skills not found")
        );
    }

    #[tokio::test]
    async fn test_estimate_unknown_location_is_422() {
        let mut profile = profile();
        profile["location"] = json!("Atlantis");
        let (status, body) = post_json("/api/v1/salary/estimate", json!({"profile": profile})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["message"],
            json!("candidate location not found")
        );
    }

    #[tokio::test]
    async fn test_job_matches() {
        let (status, body) = post_json("/api/v1/jobs/matches", json!({"profile": profile()})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(3));
        assert!(body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|job| job["status"] == json!("active")));
    }

    #[tokio::test]
    async fn test_job_matches_paged_with_total_count() {
        let (status, body) = post_json(
            "/api/v1/jobs/matches?skip=1&limit=1",
            json!({"profile": profile()}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(3));
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (_, body) = post_json(
            "/api/v1/jobs/matches?skip=5",
            json!({"profile": profile()}),
        )
        .await;
        assert_eq!(body["count"], json!(3));
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_job_matches_rejects_negative_skip() {
        let (status, _) = post_json(
            "/api/v1/jobs/matches?skip=-1",
            json!({"profile": profile()}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_estimate_reports_unknown_skills_before_missing_location() {
        let (status, body) = post_json(
            "/api/v1/salary/estimate",
            json!({"profile": {
                "key_skills": [{"name": "COBOL", "proficiency": 3}],
                "industries_of_interest": ["FinTech"]
            }}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["message"],
            json!("candidate key skills not found")
        );
    }

    #[tokio::test]
    async fn test_market_insights() {
        let (status, body) =
            post_json("/api/v1/jobs/insights", json!({"status": "active"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_jobs"], json!(4));
        // Midpoints 90k, 80k, 45k.
        assert_eq!(body["average_salary"], json!(71666.66666666667));
    }

    #[tokio::test]
    async fn test_market_insights_rejects_inverted_bounds() {
        let (status, body) = post_json(
            "/api/v1/jobs/insights",
            json!({"min_salary": 100000, "max_salary": 50000}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
    }
}
