use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use kine_core::models::device::Device;
use kine_core::models::selection::DeviceSelection;
use kine_core::params;
use kine_feedback::composer::{DEGRADED_MESSAGE, FeedbackComposer, FeedbackStatus};
use kine_feedback::error::FeedbackError;
use kine_feedback::model::LanguageModel;

enum Behavior {
    Reply(&'static str),
    Fail,
    Sleep(Duration),
}

struct MockModel {
    behavior: Behavior,
    calls: AtomicUsize,
    last_prompt: std::sync::Mutex<Option<String>>,
}

impl MockModel {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_prompt: std::sync::Mutex::new(None),
        })
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    fn model_id(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String, FeedbackError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.behavior {
            Behavior::Reply(text) => Ok(text.to_string()),
            Behavior::Fail => Err(FeedbackError::Status {
                status: 503,
                body: "overloaded".to_string(),
            }),
            Behavior::Sleep(d) => {
                tokio::time::sleep(*d).await;
                Ok("too late".to_string())
            }
        }
    }
}

fn wrong_device_selection() -> DeviceSelection {
    DeviceSelection::new(Device::Infrared)
        .with_param(params::DISTANCE_CM, 50.0)
        .with_justification("Quiero calentar la rodilla.")
}

#[tokio::test]
async fn no_model_returns_degraded_message_and_keeps_verdict() {
    let case = kine_cases::get_case("01-ruptura-lca").unwrap();
    let selection = wrong_device_selection();
    let verdict = kine_validate::validate(&case.id, &selection);
    let before = verdict.clone();

    let composer = FeedbackComposer::new(None);
    assert!(!composer.is_configured());

    let feedback = composer.compose(case, &selection, &verdict).await;
    assert_eq!(feedback.explanation, DEGRADED_MESSAGE);
    assert_eq!(feedback.status, FeedbackStatus::NotConfigured);
    assert!(!feedback.is_generated());
    assert_eq!(verdict, before);
    assert!(!verdict.is_correct);
}

#[tokio::test]
async fn successful_model_reply_is_trimmed() {
    let case = kine_cases::get_case("01-ruptura-lca").unwrap();
    let selection = wrong_device_selection();
    let verdict = kine_validate::validate(&case.id, &selection);

    let model = MockModel::new(Behavior::Reply("  La corriente rusa era la indicada.  \n"));
    let composer = FeedbackComposer::new(Some(model.clone()));
    let feedback = composer.compose(case, &selection, &verdict).await;

    assert_eq!(feedback.status, FeedbackStatus::Generated);
    assert_eq!(feedback.explanation, "La corriente rusa era la indicada.");
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);

    let prompt = model.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains(&case.title));
    assert!(prompt.contains("[FAIL] Inappropriate device"));
    assert!(prompt.contains("Quiero calentar la rodilla."));
    assert!(prompt.ends_with("Answer in Spanish."));
}

#[tokio::test]
async fn model_error_degrades() {
    let case = kine_cases::get_case("05-atrofia-cuadriceps").unwrap();
    let selection = wrong_device_selection();
    let verdict = kine_validate::validate(&case.id, &selection);

    let composer = FeedbackComposer::new(Some(MockModel::new(Behavior::Fail)));
    let feedback = composer.compose(case, &selection, &verdict).await;

    assert_eq!(feedback.explanation, DEGRADED_MESSAGE);
    match feedback.status {
        FeedbackStatus::Failed { detail } => assert!(detail.contains("503")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_reply_degrades() {
    let case = kine_cases::get_case("05-atrofia-cuadriceps").unwrap();
    let composer = FeedbackComposer::new(Some(MockModel::new(Behavior::Reply("   "))));
    let feedback = composer
        .compose_summaries(case, "Device: TENS.", "[PASS] ok")
        .await;

    assert_eq!(feedback.explanation, DEGRADED_MESSAGE);
    assert!(matches!(feedback.status, FeedbackStatus::Failed { .. }));
}

#[tokio::test]
async fn slow_model_times_out() {
    let case = kine_cases::get_case("05-atrofia-cuadriceps").unwrap();
    let composer = FeedbackComposer::new(Some(MockModel::new(Behavior::Sleep(
        Duration::from_secs(60),
    ))))
    .with_timeout(Duration::from_millis(250));

    let feedback = composer
        .compose_summaries(case, "Device: TENS.", "[PASS] ok")
        .await;

    assert_eq!(feedback.explanation, DEGRADED_MESSAGE);
    assert_eq!(feedback.status, FeedbackStatus::TimedOut { after_ms: 250 });
}

#[tokio::test]
async fn language_is_configurable() {
    let case = kine_cases::get_case("05-atrofia-cuadriceps").unwrap();
    let model = MockModel::new(Behavior::Reply("Well done."));
    let composer = FeedbackComposer::new(Some(model.clone())).with_language("English");
    composer
        .compose_summaries(case, "Device: TENS.", "[PASS] ok")
        .await;

    let prompt = model.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.ends_with("Answer in English."));
}

#[test]
fn feedback_serializes_flat() {
    let feedback = kine_feedback::composer::Feedback {
        explanation: DEGRADED_MESSAGE.to_string(),
        status: FeedbackStatus::TimedOut { after_ms: 8000 },
    };
    let json = serde_json::to_value(&feedback).unwrap();
    assert_eq!(json["status"], "timed_out");
    assert_eq!(json["after_ms"], 8000);
    assert_eq!(json["explanation"], DEGRADED_MESSAGE);
}
