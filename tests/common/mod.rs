//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use advertisement_service::config::{
    CorsSettings, DatabaseSettings, PaginationSettings, ServerSettings, Settings, StorageBackend,
    StorageSettings,
};
use advertisement_service::domain::{AdvertisementDocument, AdvertisementRepository, MediaType};
use advertisement_service::infrastructure::repositories::InMemoryAdvertisementRepository;
use advertisement_service::startup::{build_router, AppState};

pub const ADVERTISEMENTS: &str = "/api/v1/advertisements";

/// Test application backed by the in-memory store
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryAdvertisementRepository>,
}

/// Settings for a memory-backed instance
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        storage: StorageSettings {
            backend: StorageBackend::Memory,
        },
        database: DatabaseSettings {
            url: None,
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 1,
            run_migrations: false,
        },
        pagination: PaginationSettings {
            default_size: 10,
            max_size: 2000,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let store = Arc::new(InMemoryAdvertisementRepository::new());
        let state = AppState::new(test_settings(), store.clone());

        Self {
            router: build_router(state),
            store,
        }
    }

    /// Put a document straight into the store
    pub async fn seed(&self, id: &str, title: &str) -> AdvertisementDocument {
        let start = future_start();
        let document = AdvertisementDocument {
            id: id.into(),
            title: title.into(),
            content: "Come and visit us!".into(),
            media_url: "http://example.com/image.jpg".into(),
            media_type: MediaType::Image,
            start_date: start,
            end_date: start + Duration::days(9),
        };
        self.store.save(document).await.unwrap()
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &Value) -> Response {
        self.send(json_request("POST", uri, body.to_string())).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &Value) -> Response {
        self.send(json_request("PUT", uri, body.to_string())).await
    }

    /// Make a POST request with a raw body
    pub async fn post_raw(&self, uri: &str, body: &str) -> Response {
        self.send(json_request("POST", uri, body.to_string())).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Read a response as status plus parsed JSON body
pub async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Read a response as status, content type and text body
pub async fn text_body(response: Response) -> (StatusCode, String, String) {
    let status = response.status();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

/// A start date safely in the future, at millisecond precision
pub fn future_start() -> DateTime<Utc> {
    (Utc::now() + Duration::days(30)).trunc_subsecs(3)
}

/// A valid create/update body
pub fn ad_body(title: &str) -> Value {
    let start = future_start();
    json!({
        "title": title,
        "content": "Come and visit us!",
        "media_url": "http://example.com/image.jpg",
        "media_type": "IMAGE",
        "start_date": start,
        "end_date": start + Duration::days(9),
    })
}
