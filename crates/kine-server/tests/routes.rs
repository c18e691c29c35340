use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use kine_feedback::composer::{DEGRADED_MESSAGE, FeedbackComposer};
use kine_feedback::error::FeedbackError;
use kine_feedback::model::LanguageModel;
use kine_server::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

struct CannedModel;

#[async_trait]
impl LanguageModel for CannedModel {
    fn model_id(&self) -> &str {
        "canned"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, FeedbackError> {
        Ok("Buena elección: la corriente rusa recluta fibras tipo II.".to_string())
    }
}

fn app_without_model() -> Router {
    kine_server::app(AppState::new(FeedbackComposer::new(None)))
}

fn app_with_model() -> Router {
    kine_server::app(AppState::new(FeedbackComposer::new(Some(Arc::new(
        CannedModel,
    )))))
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

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn correct_russian_request() -> Value {
    json!({
        "case_id": "01-ruptura-lca",
        "selection": {
            "device": "russian",
            "parameters": {
                "carrier_hz": 2500,
                "burst_frequency_hz": 50,
                "ratio": "1:5"
            },
            "justification": "Fortalecimiento de cuádriceps con ciclos de reposo largos."
        }
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(app_without_model(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn cases_lists_only_selectable_cases() {
    let (status, body) = send(app_without_model(), get("/cases")).await;
    assert_eq!(status, StatusCode::OK);

    let cases = body.as_array().unwrap();
    assert_eq!(cases.len(), 21);
    assert!(cases.iter().all(|c| c["id"] != kine_cases::PLACEHOLDER_CASE_ID));
    assert_eq!(cases[0]["id"], "01-ruptura-lca");
    assert_eq!(cases[0]["title"], "Ruptura LCA (Debilidad M3)");
}

#[tokio::test]
async fn case_detail_withholds_solution() {
    let (status, body) = send(app_without_model(), get("/cases/07-ulcera-talon")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "07-ulcera-talon");
    assert!(body["description"].as_str().is_some_and(|d| !d.is_empty()));
    assert!(body.get("accepted_devices").is_none());
    assert!(body.get("device_rules").is_none());
}

#[tokio::test]
async fn unknown_and_placeholder_cases_are_not_found() {
    for id in ["99-no-existe", kine_cases::PLACEHOLDER_CASE_ID] {
        let (status, body) = send(app_without_model(), get(&format!("/cases/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains(id));
    }
}

#[tokio::test]
async fn device_menu_groups_devices_and_labels() {
    let (status, body) = send(app_without_model(), get("/devices")).await;
    assert_eq!(status, StatusCode::OK);

    let families = body["families"].as_array().unwrap();
    assert_eq!(families.len(), 2);
    assert_eq!(families[0]["id"], "electrotherapy");
    assert_eq!(families[1]["id"], "thermotherapy");

    let faradic = families[0]["devices"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["id"] == "faradic")
        .unwrap();
    assert_eq!(faradic["variants"].as_array().unwrap().len(), 3);
    assert_eq!(faradic["variants"][0]["label"], "Träbert");

    assert_eq!(body["choices"]["us_frequency"], json!(["1 MHz", "3 MHz"]));
    assert_eq!(
        body["choices"]["emission_mode"],
        json!(["Pulsado (PSWD)", "Continuo (CSWD)"])
    );
}

#[tokio::test]
async fn mean_power_readout() {
    let request = post_json(
        "/power/mean",
        json!({ "pulse_width_us": 200, "pulse_frequency_hz": 50, "peak_power_w": 100 }),
    );
    let (status, body) = send(app_without_model(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "Pulsado (PSWD)");
    assert_eq!(body["mean_power_w"], 1.0);

    let request = post_json(
        "/power/mean",
        json!({ "mode": "Continuo (CSWD)", "peak_power_w": 40 }),
    );
    let (_, body) = send(app_without_model(), request).await;
    assert_eq!(body["mean_power_w"], 40.0);
}

#[tokio::test]
async fn validate_returns_verdict() {
    let (status, body) = send(
        app_without_model(),
        post_json("/validate", correct_russian_request()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["case_id"], "01-ruptura-lca");
    assert_eq!(body["is_correct"], true);
    assert_eq!(body["findings"][0]["severity"], "pass");
    assert_eq!(body["findings"][0]["subject"]["kind"], "device");
}

#[tokio::test]
async fn validate_rejects_wrong_device() {
    let request = post_json(
        "/validate",
        json!({
            "case_id": "01-ruptura-lca",
            "selection": { "device": "Infrarrojo", "parameters": { "distance_cm": 50 } }
        }),
    );
    let (status, body) = send(app_without_model(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_correct"], false);
    assert_eq!(body["findings"].as_array().unwrap().len(), 1);
    assert_eq!(body["findings"][0]["severity"], "fail");
}

#[tokio::test]
async fn validate_placeholder_case_is_a_verdict_not_an_error() {
    let request = post_json(
        "/validate",
        json!({
            "case_id": kine_cases::PLACEHOLDER_CASE_ID,
            "selection": { "device": "tens" }
        }),
    );
    let (status, body) = send(app_without_model(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_correct"], false);
    assert_eq!(body["findings"][0]["subject"]["kind"], "case");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, body) = send(app_without_model(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_device_is_bad_request() {
    let request = post_json(
        "/validate",
        json!({ "case_id": "01-ruptura-lca", "selection": { "device": "laser" } }),
    );
    let (status, body) = send(app_without_model(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("unknown device: laser"));
}

#[tokio::test]
async fn evaluate_without_model_still_returns_verdict() {
    let (status, body) = send(
        app_without_model(),
        post_json("/evaluate", correct_russian_request()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verdict"]["is_correct"], true);
    assert_eq!(body["feedback"]["status"], "not_configured");
    assert_eq!(body["feedback"]["explanation"], DEGRADED_MESSAGE);
    assert!(body["evaluation_id"].as_str().is_some_and(|id| id.len() == 36));
    assert!(body["generated_at"].is_string());
}

#[tokio::test]
async fn evaluate_with_model_includes_explanation() {
    let (status, body) = send(
        app_with_model(),
        post_json("/evaluate", correct_russian_request()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["feedback"]["status"], "generated");
    assert_eq!(
        body["feedback"]["explanation"],
        "Buena elección: la corriente rusa recluta fibras tipo II."
    );
}

#[tokio::test]
async fn evaluate_unknown_case_skips_feedback() {
    let request = post_json(
        "/evaluate",
        json!({ "case_id": "99-no-existe", "selection": { "device": "tens" } }),
    );
    let (status, body) = send(app_with_model(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verdict"]["is_correct"], false);
    assert!(body["feedback"].is_null());
}
