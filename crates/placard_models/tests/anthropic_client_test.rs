//! Tests for the Anthropic client against a local mock of the Messages API.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use placard_core::{Content, ContentBlock, GenerateRequest, Message};
use placard_error::{AnthropicErrorKind, ModelsErrorKind, PlacardErrorKind};
use placard_interface::PlacardDriver;
use placard_models::{AnthropicClient, AnthropicConfig};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<(HeaderMap, Value)>>>;

async fn record_and_reply(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    seen.lock().expect("Lock poisoned").push((headers, body));
    Json(json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [
            {"type": "text", "text": "\\documentclass{article}"},
            {"type": "text", "text": "\\begin{document}Winter\\end{document}"}
        ],
        "model": "claude-3-5-sonnet-20241022",
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 42, "output_tokens": 17}
    }))
}

async fn overloaded() -> (StatusCode, &'static str) {
    (
        StatusCode::from_u16(529).expect("Valid status"),
        r#"{"type":"error","error":{"type":"overloaded_error"}}"#,
    )
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Bind mock server");
    let addr = listener.local_addr().expect("Local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock server");
    });
    format!("http://{}", addr)
}

fn client(endpoint: String) -> AnthropicClient {
    let config = AnthropicConfig::builder()
        .api_key("test-key")
        .endpoint(endpoint)
        .build()
        .expect("Valid config");
    AnthropicClient::new(config).expect("Client builds")
}

#[tokio::test]
async fn test_generate_sends_system_and_turns() {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/v1/messages", post(record_and_reply))
        .with_state(seen.clone());
    let client = client(spawn(app).await);

    let request = GenerateRequest::builder()
        .system("You are a design assistant".to_string())
        .messages(vec![
            Message::user("I need a poster"),
            Message::assistant(Content::Blocks(vec![ContentBlock::text("Option 1 or 2?")])),
            Message::user("I choose option 2."),
        ])
        .build()
        .expect("Valid request");

    let response = client.generate(&request).await.expect("Generation succeeds");

    assert_eq!(
        response.content().text(),
        "\\documentclass{article}\n\\begin{document}Winter\\end{document}"
    );
    assert_eq!(response.stop_reason().as_deref(), Some("end_turn"));
    assert_eq!(response.usage().as_ref().map(|u| u.total_tokens()), Some(59));

    let seen = seen.lock().expect("Lock poisoned");
    assert_eq!(seen.len(), 1);
    let (headers, body) = &seen[0];
    assert_eq!(headers["x-api-key"], "test-key");
    assert_eq!(headers["anthropic-version"], "2023-06-01");
    assert_eq!(body["model"], "claude-3-5-sonnet-20241022");
    assert_eq!(body["max_tokens"], 1024);
    assert_eq!(body["system"], "You are a design assistant");
    assert_eq!(body["messages"][0], json!({"role": "user", "content": "I need a poster"}));
    assert_eq!(
        body["messages"][1],
        json!({"role": "assistant", "content": [{"type": "text", "text": "Option 1 or 2?"}]})
    );
    assert_eq!(body["messages"][2]["role"], "user");
}

#[tokio::test]
async fn test_document_blocks_use_base64_source() {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/v1/messages", post(record_and_reply))
        .with_state(seen.clone());
    let client = client(spawn(app).await);

    let request = GenerateRequest::builder()
        .messages(vec![Message::user(Content::Blocks(vec![
            ContentBlock::document("application/pdf", "JVBERi0xLjQ="),
            ContentBlock::text("Analyze this brand guideline document"),
        ]))])
        .max_tokens(2048u32)
        .model("claude-3-opus".to_string())
        .build()
        .expect("Valid request");

    client.generate(&request).await.expect("Generation succeeds");

    let seen = seen.lock().expect("Lock poisoned");
    let body = &seen[0].1;
    assert_eq!(body["max_tokens"], 2048);
    assert_eq!(body["model"], "claude-3-opus");
    assert!(body.get("system").is_none());
    assert_eq!(
        body["messages"][0]["content"][0],
        json!({
            "type": "document",
            "source": {"type": "base64", "media_type": "application/pdf", "data": "JVBERi0xLjQ="}
        })
    );
    assert_eq!(body["messages"][0]["content"][1]["type"], "text");
}

#[tokio::test]
async fn test_error_status_becomes_api_error() {
    let app = Router::new().route("/v1/messages", post(overloaded));
    let client = client(spawn(app).await);

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("hello")])
        .build()
        .expect("Valid request");

    let err = client.generate(&request).await.expect_err("API error");
    assert!(err.is_external());
    match err.kind() {
        PlacardErrorKind::Models(e) => match &e.kind {
            ModelsErrorKind::Anthropic(AnthropicErrorKind::ApiError { status, message }) => {
                assert_eq!(*status, 529);
                assert!(message.contains("overloaded_error"));
            }
            other => panic!("Expected ApiError, got {:?}", other),
        },
        other => panic!("Expected Models error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Bind");
    let addr = listener.local_addr().expect("Local address");
    drop(listener);

    let client = client(format!("http://{}", addr));
    let request = GenerateRequest::builder()
        .messages(vec![Message::user("hello")])
        .build()
        .expect("Valid request");

    let err = client.generate(&request).await.expect_err("Connection refused");
    assert!(matches!(
        err.kind(),
        PlacardErrorKind::Models(e) if matches!(e.kind, ModelsErrorKind::Anthropic(AnthropicErrorKind::Http(_)))
    ));
}

#[test]
fn test_driver_identity() {
    let client = client("http://localhost:1".to_string());
    assert_eq!(client.provider_name(), "anthropic");
    assert_eq!(client.model_name(), "claude-3-5-sonnet-20241022");
}
