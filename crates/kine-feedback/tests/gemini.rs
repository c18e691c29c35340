use std::time::Duration;

use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Json;
use kine_feedback::error::FeedbackError;
use kine_feedback::gemini::{DEFAULT_MODEL, GeminiModel};
use kine_feedback::model::LanguageModel;
use serde_json::{Value, json};

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn echo_prompt(
    Path(model): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
        return (StatusCode::FORBIDDEN, Json(json!({ "error": "bad key" })));
    }
    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": format!("{model}: ") }, { "text": prompt }],
                },
            }],
        })),
    )
}

fn model(base_url: &str, key: &str) -> GeminiModel {
    GeminiModel::new(key, DEFAULT_MODEL, Duration::from_secs(5))
        .unwrap()
        .with_base_url(base_url)
}

#[tokio::test]
async fn generate_returns_joined_candidate_text() {
    let base = spawn(Router::new().route("/models/{call}", post(echo_prompt))).await;
    let reply = model(&base, "test-key").generate("hola").await.unwrap();
    assert_eq!(reply, format!("{DEFAULT_MODEL}:generateContent: hola"));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let base = spawn(Router::new().route("/models/{call}", post(echo_prompt))).await;
    let err = model(&base, "wrong-key").generate("hola").await.unwrap_err();
    match err {
        FeedbackError::Status { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("bad key"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidates_is_a_parse_error() {
    let router = Router::new().route(
        "/models/{call}",
        post(|| async { Json(json!({ "candidates": [] })) }),
    );
    let base = spawn(router).await;
    let err = model(&base, "test-key").generate("hola").await.unwrap_err();
    assert!(matches!(err, FeedbackError::ResponseParse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_an_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let err = model(&format!("http://{addr}"), "test-key")
        .generate("hola")
        .await
        .unwrap_err();
    assert!(matches!(err, FeedbackError::Http(_)));
}
