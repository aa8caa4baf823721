//! Health Check API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{json_body, TestApp};

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let (status, json) = json_body(app.get("/health").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
}

/// Test liveness probe endpoint
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let (status, json) = json_body(app.get("/health/live").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "alive");
}

/// Test readiness probe reports the store check
#[tokio::test]
async fn test_readiness_probe() {
    let app = TestApp::new();

    let (status, json) = json_body(app.get("/health/ready").await).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["checks"]["store"]["status"].is_string());
    assert!(json["uptime_seconds"].is_u64());
}

/// Test metrics endpoint exposes request counters after traffic
#[tokio::test]
async fn test_metrics_endpoint() {
    let app = TestApp::new();
    app.get("/health").await;

    let response = app.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("advertisement_service_http_requests_total"));
}
