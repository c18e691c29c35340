use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use kine_core::models::power::MeanPowerInput;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct MeanPowerResponse {
    pub mode: &'static str,
    pub mean_power_w: f64,
}

/// Live mean-power readout for the shortwave panel.
pub async fn mean_power(
    payload: Result<Json<MeanPowerInput>, JsonRejection>,
) -> Result<Json<MeanPowerResponse>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(MeanPowerResponse {
        mode: input.emission_mode().label(),
        mean_power_w: input.mean_power(),
    }))
}
