//! Advertisement API Tests
//!
//! End-to-end tests of the advertisement endpoints against the in-memory store.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use advertisement_service::domain::{
    AdvertisementRepository, CONTENT_TOO_SHORT, END_IN_PAST, START_AFTER_END, TITLE_TOO_SHORT,
};

use crate::common::{ad_body, future_start, json_body, text_body, TestApp, ADVERTISEMENTS};

fn item(id: &str) -> String {
    format!("{}/{}", ADVERTISEMENTS, id)
}

fn assert_error(body: &Value, code: &str, message: &str) {
    assert_eq!(body["error_code"], code);
    assert_eq!(body["error_message"], message);
}

#[tokio::test]
async fn test_create_returns_advertisement_with_new_id() {
    let app = TestApp::new();
    let body = ad_body("My Ad title");

    let (status, json) = json_body(app.post_json(ADVERTISEMENTS, &body).await).await;

    assert_eq!(status, StatusCode::OK);
    let id = json["_id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert_eq!(json["title"], "My Ad title");
    assert_eq!(json["media_type"], "IMAGE");
    assert_eq!(json["start_date"], body["start_date"]);
    assert_eq!(json["end_date"], body["end_date"]);
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = TestApp::new();
    let mut body = ad_body("My Ad title");
    body["_id"] = json!("chosen-by-client");

    let (_, json) = json_body(app.post_json(ADVERTISEMENTS, &body).await).await;

    assert_ne!(json["_id"], "chosen-by-client");
    assert!(app.store.find_by_id("chosen-by-client").await.unwrap().is_none());
}

#[test_case("title", "", TITLE_TOO_SHORT ; "empty title")]
#[test_case("title", "a", TITLE_TOO_SHORT ; "one character title")]
#[test_case("content", "", CONTENT_TOO_SHORT ; "empty content")]
#[tokio::test]
async fn test_create_rejects_short_text(field: &str, value: &str, message: &str) {
    let app = TestApp::new();
    let mut body = ad_body("My Ad title");
    body[field] = json!(value);

    let (status, json) = json_body(app.post_json(ADVERTISEMENTS, &body).await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&json, "VALIDATION_ERROR", message);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_rejected_create_is_counted_as_validation_error() {
    let app = TestApp::new();
    let mut body = ad_body("My Ad title");
    body["title"] = json!("");

    let (status, _) = json_body(app.post_json(ADVERTISEMENTS, &body).await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, _, metrics) = text_body(app.get("/metrics").await).await;
    assert!(metrics.contains(r#"operation="create",outcome="validation_error""#));
}

#[tokio::test]
async fn test_create_accepts_two_unit_emoji_title() {
    let app = TestApp::new();
    let body = ad_body("😀");

    let (status, json) = json_body(app.post_json(ADVERTISEMENTS, &body).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "😀");
}

#[tokio::test]
async fn test_create_rejects_unknown_url_protocol() {
    let app = TestApp::new();
    let mut body = ad_body("My Ad title");
    body["media_url"] = json!("ht://example.com/image.jpg");

    let (status, json) = json_body(app.post_json(ADVERTISEMENTS, &body).await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "VALIDATION_ERROR");
    assert!(json["error_message"]
        .as_str()
        .unwrap()
        .starts_with("URL is not valid"));
}

#[tokio::test]
async fn test_create_rejects_start_after_end() {
    let app = TestApp::new();
    let start = future_start();
    let mut body = ad_body("My Ad title");
    body["start_date"] = json!(start + Duration::days(5));
    body["end_date"] = json!(start);

    let (status, json) = json_body(app.post_json(ADVERTISEMENTS, &body).await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&json, "VALIDATION_ERROR", START_AFTER_END);
}

#[tokio::test]
async fn test_create_rejects_end_in_past() {
    let app = TestApp::new();
    let now = Utc::now();
    let mut body = ad_body("My Ad title");
    body["start_date"] = json!(now - Duration::days(10));
    body["end_date"] = json!(now - Duration::days(1));

    let (status, json) = json_body(app.post_json(ADVERTISEMENTS, &body).await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&json, "VALIDATION_ERROR", END_IN_PAST);
}

#[test_case("{not json" ; "malformed json")]
#[test_case(r#"{"title": "My Ad title"}"# ; "missing fields")]
#[test_case(r#"{"title": "ab", "content": "ab", "media_url": "http://a.b", "media_type": "AUDIO", "start_date": "2029-01-01T00:00:00Z", "end_date": "2029-01-02T00:00:00Z"}"# ; "unknown media type")]
#[tokio::test]
async fn test_create_rejects_unreadable_body(raw: &str) {
    let app = TestApp::new();

    let (status, json) = json_body(app.post_raw(ADVERTISEMENTS, raw).await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_returns_page_envelope() {
    let app = TestApp::new();
    app.seed("first", "First ad").await;
    app.seed("second", "Second ad").await;

    let (status, json) = json_body(app.get(ADVERTISEMENTS).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalElements"], 2);
    assert_eq!(json["totalPages"], 1);
    assert_eq!(json["size"], 10);
    assert_eq!(json["number"], 0);
    assert_eq!(json["numberOfElements"], 2);
    assert_eq!(json["first"], true);
    assert_eq!(json["last"], true);
    assert_eq!(json["content"][0]["_id"], "first");
    assert_eq!(json["content"][1]["_id"], "second");
}

#[tokio::test]
async fn test_list_pages_and_sorts() {
    let app = TestApp::new();
    app.seed("c", "charlie").await;
    app.seed("a", "alpha").await;
    app.seed("b", "bravo").await;

    let uri = format!("{}?page=1&size=2&sort=title,asc", ADVERTISEMENTS);
    let (status, json) = json_body(app.get(&uri).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalElements"], 3);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["number"], 1);
    assert_eq!(json["content"].as_array().unwrap().len(), 1);
    assert_eq!(json["content"][0]["_id"], "c");
}

#[tokio::test]
async fn test_list_accepts_repeated_sort_keys() {
    let app = TestApp::new();
    app.seed("a", "same").await;
    app.seed("b", "first").await;
    app.seed("c", "same").await;

    let uri = format!("{}?sort=title&sort=_id,desc", ADVERTISEMENTS);
    let (status, json) = json_body(app.get(&uri).await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "VALIDATION_ERROR");

    let uri = format!("{}?sort=title&sort=media_url,desc&sort=", ADVERTISEMENTS);
    let (status, json) = json_body(app.get(&uri).await).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = json["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|ad| ad["_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = TestApp::new();

    let (status, json) = json_body(app.get(ADVERTISEMENTS).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalElements"], 0);
    assert_eq!(json["empty"], true);
}

#[test_case("page=-1" ; "negative page")]
#[test_case("size=abc" ; "non numeric size")]
#[test_case("sort=colour" ; "unknown sort field")]
#[tokio::test]
async fn test_list_rejects_bad_query(query: &str) {
    let app = TestApp::new();

    let uri = format!("{}?{}", ADVERTISEMENTS, query);
    let (status, json) = json_body(app.get(&uri).await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_existing_advertisement() {
    let app = TestApp::new();
    let seeded = app.seed("known", "Known ad").await;

    let (status, json) = json_body(app.get(&item("known")).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["_id"], "known");
    assert_eq!(json["title"], seeded.title);
    assert_eq!(json["media_url"], seeded.media_url);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let app = TestApp::new();

    let (status, json) = json_body(app.get(&item("anyId")).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(
        &json,
        "ADVERTISEMENT_NOT_FOUND",
        "Advertisement with id: anyId not found",
    );
}

#[tokio::test]
async fn test_delete_existing_advertisement() {
    let app = TestApp::new();
    app.seed("doomed", "Doomed ad").await;

    let (status, content_type, text) = text_body(app.delete(&item("doomed")).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "deleted!");
    assert!(content_type.starts_with("text/plain"));

    let (status, _) = json_body(app.get(&item("doomed")).await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let app = TestApp::new();

    let (status, json) = json_body(app.delete(&item("anyId")).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(
        &json,
        "ADVERTISEMENT_NOT_FOUND",
        "Advertisement with id: anyId not found",
    );
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_id() {
    let app = TestApp::new();
    app.seed("existing", "Old title").await;
    app.seed("other", "Other ad").await;
    let mut body = ad_body("New title");
    body["media_type"] = json!("VIDEO");
    body["_id"] = json!("other");

    let (status, json) = json_body(app.put_json(&item("existing"), &body).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["_id"], "existing");
    assert_eq!(json["title"], "New title");
    assert_eq!(json["media_type"], "VIDEO");
    assert_eq!(app.store.len(), 2);

    let (_, other) = json_body(app.get(&item("other")).await).await;
    assert_eq!(other["title"], "Other ad");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = TestApp::new();

    let (status, json) = json_body(app.put_json(&item("anyId"), &ad_body("New title")).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(
        &json,
        "ADVERTISEMENT_NOT_FOUND",
        "Advertisement with id: anyId not found",
    );
}

#[tokio::test]
async fn test_update_with_invalid_body_keeps_stored_document() {
    let app = TestApp::new();
    app.seed("existing", "Old title").await;
    let mut body = ad_body("New title");
    body["content"] = json!("x");

    let (status, json) = json_body(app.put_json(&item("existing"), &body).await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&json, "VALIDATION_ERROR", CONTENT_TOO_SHORT);
    let stored = app.store.find_by_id("existing").await.unwrap().unwrap();
    assert_eq!(stored.title, "Old title");
}
