use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use jiff::Timestamp;
use serde::Serialize;
use uuid::Uuid;

use kine_core::models::finding::ValidationVerdict;
use kine_feedback::composer::Feedback;

use super::validate::ValidateRequest;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct EvaluationResponse {
    pub evaluation_id: Uuid,
    pub generated_at: Timestamp,
    pub verdict: ValidationVerdict,
    /// `None` when no selectable case was given; the verdict already says so.
    pub feedback: Option<Feedback>,
}

/// Validate, then ask the tutor model to explain the verdict.
///
/// Feedback problems degrade the `feedback` field only; the verdict is
/// always returned.
pub async fn evaluate_selection(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let Json(req) = payload?;
    let verdict = kine_validate::validate(&req.case_id, &req.selection);

    let feedback = match kine_cases::get_case(&req.case_id) {
        Some(case) if !kine_cases::is_placeholder(&case.id) => {
            Some(state.composer.compose(case, &req.selection, &verdict).await)
        }
        _ => None,
    };

    let evaluation_id = Uuid::new_v4();
    tracing::info!(
        %evaluation_id,
        case_id = %req.case_id,
        is_correct = verdict.is_correct,
        feedback_generated = feedback.as_ref().is_some_and(Feedback::is_generated),
        "evaluation completed"
    );

    Ok(Json(EvaluationResponse {
        evaluation_id,
        generated_at: Timestamp::now(),
        verdict,
        feedback,
    }))
}
