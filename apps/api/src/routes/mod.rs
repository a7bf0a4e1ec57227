pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::session::handlers as series;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Parameter collector
        .route("/api/v1/form", get(generation::handle_get_form))
        .route(
            "/api/v1/form/duration",
            post(generation::handle_adjust_duration),
        )
        // Session + document
        .route("/api/v1/series", get(series::handle_get_series))
        .route("/api/v1/series/generate", post(generation::handle_generate))
        .route("/api/v1/series/reset", post(series::handle_reset))
        .route("/api/v1/series/pages", get(series::handle_get_pages))
        .route("/api/v1/series/print", get(series::handle_print))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tokio::sync::Notify;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::generation::generator::CurriculumGenerator;
    use crate::layout::default_page_config;
    use crate::llm_client::DEFAULT_BASE_URL;
    use crate::session::testing::FakeGenerator;
    use crate::session::SessionHandle;

    fn state_with(generator: impl CurriculumGenerator + 'static) -> AppState {
        AppState {
            session: SessionHandle::new(Arc::new(generator)),
            config: Config {
                gemini_api_key: None,
                gemini_base_url: DEFAULT_BASE_URL.to_string(),
                generation_timeout: Duration::from_secs(5),
                port: 0,
                rust_log: "info".to_string(),
            },
            page_config: default_page_config(),
        }
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn json_of(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    fn parables() -> Value {
        json!({
            "topic": "The Parables of Jesus",
            "audience": "High School",
            "duration": 4,
            "tone": "Conversational & Deep"
        })
    }

    /// Polls the session until it leaves Generating.
    async fn settle(app: &Router) -> Value {
        for _ in 0..100 {
            let (_, body) = send(app, "GET", "/api/v1/series", None).await;
            let snapshot = json_of(&body);
            if snapshot["status"] != "generating" {
                return snapshot;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("generation never resolved");
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(state_with(FakeGenerator::succeeding()));
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        let body = json_of(&body);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["credential_configured"], false);
    }

    #[tokio::test]
    async fn test_form_defaults() {
        let app = build_router(state_with(FakeGenerator::succeeding()));
        let (status, body) = send(&app, "GET", "/api/v1/form", None).await;
        assert_eq!(status, StatusCode::OK);
        let body = json_of(&body);
        assert_eq!(body["defaults"]["duration"], 4);
        assert_eq!(body["defaults"]["audience"], "High School");
        assert_eq!(body["audiences"].as_array().unwrap().len(), 4);
        assert_eq!(body["preset_topics"][0], "The Parables of Jesus");
        assert_eq!(body["max_duration"], 12);
    }

    #[tokio::test]
    async fn test_duration_adjustment_clamps() {
        let app = build_router(state_with(FakeGenerator::succeeding()));
        let (_, body) = send(
            &app,
            "POST",
            "/api/v1/form/duration",
            Some(json!({"duration": 1, "step": "decrement"})),
        )
        .await;
        assert_eq!(json_of(&body)["duration"], 1);

        let (_, body) = send(
            &app,
            "POST",
            "/api/v1/form/duration",
            Some(json!({"duration": 12, "step": "increment"})),
        )
        .await;
        assert_eq!(json_of(&body)["duration"], 12);
    }

    #[tokio::test]
    async fn test_empty_topic_is_rejected_without_state_change() {
        let app = build_router(state_with(FakeGenerator::succeeding()));
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/series/generate",
            Some(json!({"topic": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_of(&body)["error"]["code"], "VALIDATION_ERROR");

        let (_, body) = send(&app, "GET", "/api/v1/series", None).await;
        assert_eq!(json_of(&body)["status"], "idle");
    }

    #[tokio::test]
    async fn test_generate_then_view_five_pages() {
        let app = build_router(state_with(FakeGenerator::succeeding()));
        let (status, body) = send(&app, "POST", "/api/v1/series/generate", Some(parables())).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(json_of(&body)["status"], "generating");

        let snapshot = settle(&app).await;
        assert_eq!(snapshot["status"], "viewing");

        let (status, body) = send(&app, "GET", "/api/v1/series/pages", None).await;
        assert_eq!(status, StatusCode::OK);
        let pages = json_of(&body);
        assert_eq!(pages.as_array().unwrap().len(), 5);
        assert_eq!(pages[1]["header"]["label"], "Week 1");

        let (status, body) = send(&app, "GET", "/api/v1/series/print", None).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Week 4"));
    }

    #[tokio::test]
    async fn test_second_submission_conflicts_while_generating() {
        let gate = Arc::new(Notify::new());
        let app = build_router(state_with(FakeGenerator::gated(Arc::clone(&gate))));

        let (status, _) = send(&app, "POST", "/api/v1/series/generate", Some(parables())).await;
        assert_eq!(status, StatusCode::ACCEPTED);

        let (status, _) = send(&app, "POST", "/api/v1/series/generate", Some(parables())).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, "POST", "/api/v1/series/reset", None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        gate.notify_one();
        assert_eq!(settle(&app).await["status"], "viewing");
    }

    #[tokio::test]
    async fn test_failure_shows_generic_error_and_no_document() {
        let app = build_router(state_with(FakeGenerator::failing()));
        send(&app, "POST", "/api/v1/series/generate", Some(parables())).await;

        let snapshot = settle(&app).await;
        assert_eq!(snapshot["status"], "error");
        assert!(snapshot["series"].is_null());
        assert!(snapshot["error"]
            .as_str()
            .unwrap()
            .starts_with("Something went wrong"));

        let (status, _) = send(&app, "GET", "/api/v1/series/print", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle_repeatedly() {
        let app = build_router(state_with(FakeGenerator::succeeding()));
        send(&app, "POST", "/api/v1/series/generate", Some(parables())).await;
        settle(&app).await;

        for _ in 0..2 {
            let (status, body) = send(&app, "POST", "/api/v1/series/reset", None).await;
            assert_eq!(status, StatusCode::OK);
            let snapshot = json_of(&body);
            assert_eq!(snapshot["status"], "idle");
            assert!(snapshot["series"].is_null());
            assert!(snapshot["error"].is_null());
        }

        let (status, _) = send(&app, "GET", "/api/v1/series/pages", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
