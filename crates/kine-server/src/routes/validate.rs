use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use kine_core::models::finding::ValidationVerdict;
use kine_core::models::selection::DeviceSelection;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct ValidateRequest {
    pub case_id: String,
    pub selection: DeviceSelection,
}

/// Deterministic validation only; never calls the language model.
pub async fn validate_selection(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationVerdict>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(kine_validate::validate(&req.case_id, &req.selection)))
}
