use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use yomi_digest::components::ContentCategory;
use yomi_digest::config::Config;
use yomi_digest::startup::{build_router, build_state};

/// Smoke test to verify that a config can be built by hand
#[tokio::test]
async fn test_config_builds() {
    let config = Config {
        deepseek_api_key: Some("test_key".to_string()),
        timezone: "America/New_York".to_string(),
        request_timeout: Duration::from_secs(5),
        ..Config::default()
    };

    assert_eq!(config.model, "deepseek-chat");
    assert_eq!(config.tz(), chrono_tz::America::New_York);
    assert!(build_state(Arc::new(config)).is_ok());
}

/// The liveness endpoint answers without touching any upstream
#[tokio::test]
async fn test_ping_returns_pong() {
    // Unroutable upstreams: any call would fail
    let config = Config {
        calendar_url: "http://127.0.0.1:9/api/calendars".to_string(),
        texts_url: "http://127.0.0.1:9/api/v3/texts".to_string(),
        completion_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
        ..Config::default()
    };
    let app = build_router(build_state(Arc::new(config)).unwrap());

    let response = app
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"pong");
}

/// Summaries are only served over POST
#[tokio::test]
async fn test_summarize_requires_post() {
    let app = build_router(build_state(Arc::new(Config::default())).unwrap());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/summarize")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Every category has a distinct title and label
#[test]
fn test_category_metadata_is_distinct() {
    let mut labels: Vec<_> = ContentCategory::ALL.iter().map(|c| c.label()).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), 4);

    let titles: Vec<_> = ContentCategory::ALL
        .iter()
        .map(|c| c.calendar_title())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Tanya Yomi",
            "Daily Rambam (3 Chapters)",
            "Daf Yomi",
            "Halakhah Yomit"
        ]
    );
}
