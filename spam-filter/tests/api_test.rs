//! Integration tests for the HTTP API, driven in-process through the router

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use spam_filter::api::ApiServer;
use spam_filter::SpamFilter;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    ApiServer::new(Arc::new(SpamFilter::new()), "127.0.0.1:0".to_string()).router()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn check_spam(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/check_spam")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "spam-filter");
    assert_eq!(body["model_trained"], false);
}

#[tokio::test]
async fn test_check_spam_detects_spam() {
    let (status, body) = send(
        app(),
        check_spam(r#"{"message": "free money now click here urgent"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], "spam");
    assert_eq!(body["is_spam"], true);
    assert!(body["probability"].as_f64().unwrap() > 0.5);
}

#[tokio::test]
async fn test_check_spam_detects_ham() {
    let (status, body) = send(app(), check_spam(r#"{"message": "good morning everyone"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], "ham");
    assert_eq!(body["is_spam"], false);
}

#[tokio::test]
async fn test_check_spam_rejects_missing_message() {
    for payload in [r#"{}"#, r#"{"message": ""}"#, r#"{"message": null}"#] {
        let (status, body) = send(app(), check_spam(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(body["error"], "No message provided");
    }
}

#[tokio::test]
async fn test_check_spam_accepts_stop_words_only() {
    let (status, body) = send(app(), check_spam(r#"{"message": "the and of!!! 123"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], "ham");
    assert_eq!(body["probability"].as_f64().unwrap(), 0.5);
}

#[tokio::test]
async fn test_stats() {
    let request = Request::builder().uri("/api/stats").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["spam_examples"], 10);
    assert_eq!(body["ham_examples"], 10);
    assert_eq!(body["vocabulary_size"], 61);
    assert_eq!(body["spam_prior"], 0.5);
}

#[tokio::test]
async fn test_check_spam_rejects_unparseable_body() {
    let (status, body) = send(app(), check_spam("not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No JSON data provided");
}

#[tokio::test]
async fn test_check_spam_rejects_non_string_message() {
    let (status, body) = send(app(), check_spam(r#"{"message": 5}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message must be a string");
}

#[tokio::test]
async fn test_check_spam_rejects_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/check_spam")
        .body(Body::from(r#"{"message": "hello"}"#))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No JSON data provided");
}

#[tokio::test]
async fn test_api_prefixed_routes() {
    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let request = Request::builder()
        .method("POST")
        .uri("/api/check_spam")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"message": "act now limited time"}"#))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], "spam");
}
