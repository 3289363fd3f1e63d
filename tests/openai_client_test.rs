use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use intake::application::ports::{LlmClient, LlmClientError};
use intake::infrastructure::llm::OpenAiClient;

#[derive(Clone)]
struct StubState {
    responses: Arc<Mutex<VecDeque<(u16, Value)>>>,
    hits: Arc<AtomicUsize>,
}

async fn completions(State(stub): State<StubState>) -> (StatusCode, Json<Value>) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    let (status, body) = stub
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .expect("stub received more requests than scripted");
    (StatusCode::from_u16(status).unwrap(), Json(body))
}

/// Serves a scripted sequence of chat-completion responses on an ephemeral
/// port and counts how many requests arrive.
async fn spawn_stub(responses: Vec<(u16, Value)>) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = StubState {
        responses: Arc::new(Mutex::new(responses.into())),
        hits: Arc::clone(&hits),
    };

    let app = Router::new()
        .route("/chat/completions", post(completions))
        .with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), hits)
}

fn completion_body(content: &str) -> Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

fn client(base_url: String) -> OpenAiClient {
    OpenAiClient::new(
        base_url,
        "test-key".to_string(),
        "test-model".to_string(),
        256,
        0.2,
    )
}

#[tokio::test]
async fn given_transient_server_error_when_completing_then_request_is_retried() {
    let (base_url, hits) = spawn_stub(vec![
        (500, json!({"error": "upstream hiccup"})),
        (200, completion_body("recovered")),
    ])
    .await;

    let result = client(base_url).complete("prompt").await;

    assert_eq!(result.unwrap(), "recovered");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_rate_limit_when_completing_then_request_is_retried() {
    let (base_url, hits) = spawn_stub(vec![
        (429, json!({"error": "slow down"})),
        (200, completion_body("after backoff")),
    ])
    .await;

    let result = client(base_url).complete("prompt").await;

    assert_eq!(result.unwrap(), "after backoff");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_persistent_server_errors_when_completing_then_retries_are_exhausted() {
    let (base_url, hits) = spawn_stub(vec![
        (503, json!({"error": "down"})),
        (503, json!({"error": "down"})),
        (503, json!({"error": "still down"})),
    ])
    .await;

    let result = client(base_url).complete("prompt").await;

    assert!(matches!(
        result,
        Err(LlmClientError::UnexpectedStatus { status: 503, .. })
    ));
    // Initial attempt plus two retries.
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn given_client_error_when_completing_then_request_is_not_retried() {
    let (base_url, hits) = spawn_stub(vec![(400, json!({"error": "bad request"}))]).await;

    let result = client(base_url).complete("prompt").await;

    assert!(matches!(
        result,
        Err(LlmClientError::UnexpectedStatus { status: 400, .. })
    ));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
