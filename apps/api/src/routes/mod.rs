pub mod account;
pub mod applications;
pub mod health;
pub mod jobs;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Feed
        .route("/api/v1/jobs", get(jobs::handle_get_jobs))
        .route("/api/v1/jobs/search", post(jobs::handle_search_jobs))
        .route("/api/v1/alerts/:id/matches", get(jobs::handle_alert_matches))
        // Applied tracker
        .route(
            "/api/v1/applications",
            get(applications::handle_get_applications),
        )
        .route(
            "/api/v1/applications/stats",
            get(applications::handle_application_stats),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(applications::handle_update_status),
        )
        .route(
            "/api/v1/applications/:id/notes",
            post(applications::handle_add_note),
        )
        // Profile & settings
        .route(
            "/api/v1/profile",
            get(account::handle_get_profile).patch(account::handle_update_profile),
        )
        .route(
            "/api/v1/settings",
            get(account::handle_get_settings).patch(account::handle_update_settings),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::repository::{LatencyProfile, MockRepository, SessionContext};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let repo = MockRepository::new(SessionContext::seeded().unwrap(), LatencyProfile::none());
        build_router(AppState {
            repo: Arc::new(repo),
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                simulated_latency_ms: Some(0),
            },
        })
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_search_endpoint_applies_filters() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/jobs/search",
            Some(json!({ "salary_min": 150000, "remote_policy": ["Hybrid"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active_filters"], 2);
        let jobs = body["jobs"].as_array().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0]["job_id"], "2");
    }

    #[tokio::test]
    async fn test_search_accepts_fractional_and_negative_bounds() {
        let app = app();
        let (status, body) = send(
            app.clone(),
            "POST",
            "/api/v1/jobs/search",
            Some(json!({ "salary_min": 150000.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body["jobs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["job_id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);

        let (status, body) = send(
            app.clone(),
            "POST",
            "/api/v1/jobs/search",
            Some(json!({ "experience_min": -1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"].as_array().unwrap().len(), 3);

        let (status, body) = send(
            app,
            "POST",
            "/api/v1/jobs/search",
            Some(json!({ "experience_max": -1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["jobs"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_body_uses_error_envelope() {
        let app = app();
        let (status, body) = send(
            app.clone(),
            "PATCH",
            "/api/v1/settings",
            Some(json!({ "appearance": { "theme": "dark" }, "bogus": true })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("bogus"));

        let (status, body) = send(
            app,
            "PATCH",
            "/api/v1/applications/app_1/status",
            Some(json!({ "status": "ghosted" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_applications_include_stats() {
        let (status, body) = send(app(), "GET", "/api/v1/applications", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["applications"].as_array().unwrap().len(), 2);
        assert_eq!(body["stats"]["total"], 2);
        assert_eq!(body["stats"]["response_rate"], 50);
    }

    #[tokio::test]
    async fn test_status_change_then_stats() {
        let app = app();
        let (status, body) = send(
            app.clone(),
            "PATCH",
            "/api/v1/applications/app_2/status",
            Some(json!({ "status": "interview" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "interview");

        let (_, stats) = send(app, "GET", "/api/v1/applications/stats", None).await;
        assert_eq!(stats["interviews"], 2);
        assert_eq!(stats["response_rate"], 100);
    }

    #[tokio::test]
    async fn test_unknown_application_is_404() {
        let (status, body) = send(
            app(),
            "PATCH",
            "/api/v1/applications/app_9/status",
            Some(json!({ "status": "offer" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_empty_note_is_400() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/applications/app_1/notes",
            Some(json!({ "content": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_add_note() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/applications/app_2/notes",
            Some(json!({ "content": "Great call today" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let notes = body["notes"].as_array().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0]["content"], "Great call today");
    }

    #[tokio::test]
    async fn test_settings_patch_round_trip() {
        let app = app();
        let (status, body) = send(
            app.clone(),
            "PATCH",
            "/api/v1/settings",
            Some(json!({ "appearance": { "theme": "system" } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["appearance"]["theme"], "system");
        assert_eq!(body["appearance"]["density"], "comfortable");

        let (_, body) = send(app, "GET", "/api/v1/settings", None).await;
        assert_eq!(body["appearance"]["theme"], "system");
    }

    #[tokio::test]
    async fn test_profile_patch_validation() {
        let (status, _) = send(
            app(),
            "PATCH",
            "/api/v1/profile",
            Some(json!({ "name": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_alert_matches() {
        let app = app();
        let (status, body) = send(app.clone(), "GET", "/api/v1/alerts/alert_1/matches", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"].as_array().unwrap().len(), 1);

        let (status, _) = send(app, "GET", "/api/v1/alerts/missing/matches", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
