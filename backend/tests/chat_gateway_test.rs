//! Integration tests for the chat gateway
//!
//! These tests drive the full router (CORS, middleware, handler) against a
//! stubbed completion provider:
//! 1. Status-to-payload mapping for every upstream outcome
//! 2. Language-conditioned system prompt selection
//! 3. Preflight and cross-origin headers on every response
//! 4. Boundary validation and configuration failures

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use mockito::{Matcher, Server};
use safety_assistant_gateway::api;
use safety_assistant_gateway::config::{Config, UpstreamConfig};
use safety_assistant_gateway::prompts::{ENGLISH_SYSTEM_PROMPT, HINDI_SYSTEM_PROMPT};
use safety_assistant_gateway::state::GatewayState;
use serde_json::{json, Value};
use tower::ServiceExt;

const ORIGIN: &str = "http://localhost:5173";

/// Helper to build the router against a given upstream
fn create_app(base_url: &str, api_key: Option<&str>) -> Router {
    let upstream = UpstreamConfig::new(api_key.map(str::to_string), base_url);
    api::router(GatewayState::new(Config::with_upstream(upstream)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn post_chat(app: Router, body: Value) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::ORIGIN, ORIGIN)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, headers, bytes) = send(app, request).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, headers, json)
}

fn assert_cors(headers: &HeaderMap) {
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*"),
        "response should carry a permissive allow-origin header"
    );
}

async fn upstream_answering(server: &mut Server, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("POST", "/chat/completions")
        .with_status(status)
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_success_returns_completion_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"Call 112 if you are in danger."}}]}"#)
        .create_async()
        .await;

    let app = create_app(&server.url(), Some("test-key"));
    let (status, headers, body) =
        post_chat(app, json!({"message": "Is it safe to walk home?", "language": "en"})).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Call 112 if you are in danger."}));
    assert_cors(&headers);
}

#[tokio::test]
async fn test_upstream_status_mapping() {
    let cases = [
        (
            429,
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Please try again later.",
        ),
        (
            402,
            StatusCode::PAYMENT_REQUIRED,
            "Service temporarily unavailable. Please try again later.",
        ),
        (500, StatusCode::INTERNAL_SERVER_ERROR, "AI service error"),
        (503, StatusCode::INTERNAL_SERVER_ERROR, "AI service error"),
    ];

    for (upstream_status, expected_status, expected_error) in cases {
        let mut server = Server::new_async().await;
        let mock = upstream_answering(&mut server, upstream_status, r#"{"error":"boom"}"#).await;

        let app = create_app(&server.url(), Some("test-key"));
        let (status, headers, body) =
            post_chat(app, json!({"message": "hello", "language": "en"})).await;

        mock.assert_async().await;
        assert_eq!(status, expected_status, "upstream {}", upstream_status);
        assert_eq!(body, json!({"error": expected_error}));
        assert_cors(&headers);
    }
}

#[tokio::test]
async fn test_missing_credential_fails_before_upstream_call() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let app = create_app(&server.url(), None);
    let (status, headers, body) = post_chat(app, json!({"message": "hello"})).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Configuration error: AI_GATEWAY_API_KEY is not configured"})
    );
    assert_cors(&headers);
}

#[tokio::test]
async fn test_hindi_language_selects_hindi_prompt() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "messages": [
                {"role": "system", "content": HINDI_SYSTEM_PROMPT},
                {"role": "user", "content": "मुझे मदद चाहिए"}
            ]
        })))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"112 पर कॉल करें"}}]}"#)
        .create_async()
        .await;

    let app = create_app(&server.url(), Some("k"));
    let (status, _, body) =
        post_chat(app, json!({"message": "मुझे मदद चाहिए", "language": "hi"})).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "112 पर कॉल करें");
}

#[tokio::test]
async fn test_unknown_language_selects_english_prompt() {
    for language in [json!("fr"), json!("en"), Value::Null] {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::PartialJson(json!({
                "messages": [{"role": "system", "content": ENGLISH_SYSTEM_PROMPT}]
            })))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create_async()
            .await;

        let app = create_app(&server.url(), Some("k"));
        let (status, _, _) = post_chat(app, json!({"message": "hi", "language": language})).await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK, "language {:?}", language);
    }
}

#[tokio::test]
async fn test_only_latest_message_is_forwarded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({"stream": false})))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .expect(2)
        .create_async()
        .await;

    // Two independent calls; the second carries no trace of the first
    for message in ["first", "second"] {
        let app = create_app(&server.url(), Some("k"));
        let (status, _, _) = post_chat(app, json!({"message": message})).await;
        assert_eq!(status, StatusCode::OK);
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_upstream_payload_fails_closed() {
    let mut server = Server::new_async().await;
    let mock = upstream_answering(&mut server, 200, r#"{"choices":[{"message":{}}]}"#).await;

    let app = create_app(&server.url(), Some("k"));
    let (status, headers, body) = post_chat(app, json!({"message": "hello"})).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("no completion text"));
    assert_cors(&headers);
}

#[tokio::test]
async fn test_unreachable_upstream_reports_message() {
    let app = create_app("http://127.0.0.1:9", Some("k"));
    let (status, _, body) = post_chat(app, json!({"message": "hello"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Failed to send request"));
}

#[tokio::test]
async fn test_blank_message_is_rejected_at_the_boundary() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    for body in [json!({"message": "   "}), json!({"language": "en"})] {
        let app = create_app(&server.url(), Some("k"));
        let (status, headers, response) = post_chat(app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response["error"].as_str().unwrap().starts_with("Invalid request"));
        assert_cors(&headers);
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = create_app("http://127.0.0.1:9", Some("k"));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _, bytes) = send(app, request).await;
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("malformed body"));
}

#[tokio::test]
async fn test_plain_options_is_answered_by_cors_layer() {
    let mut server = Server::new_async().await;
    let upstream = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    // No OPTIONS route exists; every path answers the same way
    for uri in ["/", "/api/health"] {
        let app = create_app(&server.url(), Some("k"));
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .header(header::ORIGIN, ORIGIN)
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK, "uri {}", uri);
        assert!(body.is_empty());
        assert_cors(&headers);
    }
    upstream.assert_async().await;
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = create_app("http://127.0.0.1:9", Some("k"));
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,apikey")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_cors(&headers);
    let allowed = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(allowed.contains("apikey"));
    assert!(allowed.contains("content-type"));
}

#[tokio::test]
async fn test_other_verbs_are_not_allowed() {
    let app = create_app("http://127.0.0.1:9", Some("k"));
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ORIGIN, ORIGIN)
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(app, request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_cors(&headers);
}

#[tokio::test]
async fn test_health_check() {
    let app = create_app("http://127.0.0.1:9", None);
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, _, bytes) = send(app, request).await;
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
