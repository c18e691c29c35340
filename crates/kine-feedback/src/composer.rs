use std::sync::Arc;
use std::time::{Duration, Instant};

use kine_core::models::case::ClinicalCase;
use kine_core::models::finding::ValidationVerdict;
use kine_core::models::selection::DeviceSelection;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::model::LanguageModel;
use crate::prompt;

/// Shown instead of the tutor's explanation whenever it cannot be produced.
pub const DEGRADED_MESSAGE: &str = "[Feedback unavailable] The AI tutor could not respond. \
The technical validation above is still valid.";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);
pub const DEFAULT_LANGUAGE: &str = "Spanish";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeedbackStatus {
    Generated,
    /// No model credential configured.
    NotConfigured,
    TimedOut { after_ms: u64 },
    Failed { detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub explanation: String,
    #[serde(flatten)]
    pub status: FeedbackStatus,
}

impl Feedback {
    fn generated(text: &str) -> Self {
        Self {
            explanation: text.trim().to_string(),
            status: FeedbackStatus::Generated,
        }
    }

    fn unavailable(status: FeedbackStatus) -> Self {
        Self {
            explanation: DEGRADED_MESSAGE.to_string(),
            status,
        }
    }

    pub fn is_generated(&self) -> bool {
        self.status == FeedbackStatus::Generated
    }
}

/// Turns a verdict into tutor feedback via an optional language model.
///
/// Never fails: every collaborator problem is folded into a degraded
/// [`Feedback`].
#[derive(Clone)]
pub struct FeedbackComposer {
    model: Option<Arc<dyn LanguageModel>>,
    timeout: Duration,
    language: String,
}

impl FeedbackComposer {
    pub fn new(model: Option<Arc<dyn LanguageModel>>) -> Self {
        Self {
            model,
            timeout: DEFAULT_TIMEOUT,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    /// Compose feedback for a validated selection.
    pub async fn compose(
        &self,
        case: &ClinicalCase,
        selection: &DeviceSelection,
        verdict: &ValidationVerdict,
    ) -> Feedback {
        let student = prompt::student_summary(selection);
        self.compose_summaries(case, &student, &verdict.technical_summary())
            .await
    }

    /// Compose feedback from pre-rendered student and findings summaries.
    pub async fn compose_summaries(
        &self,
        case: &ClinicalCase,
        student_summary: &str,
        technical_summary: &str,
    ) -> Feedback {
        let Some(model) = &self.model else {
            warn!(case_id = %case.id, "no language model configured, skipping feedback");
            return Feedback::unavailable(FeedbackStatus::NotConfigured);
        };

        let prompt =
            prompt::build_prompt(case, student_summary, technical_summary, &self.language);
        let started = Instant::now();

        match tokio::time::timeout(self.timeout, model.generate(&prompt)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                info!(
                    case_id = %case.id,
                    model_id = model.model_id(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "feedback generated"
                );
                Feedback::generated(&text)
            }
            Ok(Ok(_)) => {
                warn!(case_id = %case.id, model_id = model.model_id(), "model returned empty text");
                Feedback::unavailable(FeedbackStatus::Failed {
                    detail: "empty response".to_string(),
                })
            }
            Ok(Err(e)) => {
                warn!(case_id = %case.id, model_id = model.model_id(), error = %e, "feedback generation failed");
                Feedback::unavailable(FeedbackStatus::Failed {
                    detail: e.to_string(),
                })
            }
            Err(_) => {
                warn!(
                    case_id = %case.id,
                    model_id = model.model_id(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "feedback generation timed out"
                );
                Feedback::unavailable(FeedbackStatus::TimedOut {
                    after_ms: self.timeout.as_millis() as u64,
                })
            }
        }
    }
}
