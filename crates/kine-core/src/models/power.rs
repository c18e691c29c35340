//! Mean power of a shortwave emission.
//!
//! Dose rules are checked against this derived value, not the raw peak
//! power the student dials in.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::selection::DeviceSelection;
use crate::{labels, params};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EmissionMode {
    Continuous,
    Pulsed,
}

impl EmissionMode {
    /// Any label other than the continuous one is treated as pulsed.
    pub fn from_label(label: &str) -> Self {
        if label == labels::MODE_CONTINUOUS || label == "continuous" {
            EmissionMode::Continuous
        } else {
            EmissionMode::Pulsed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmissionMode::Continuous => labels::MODE_CONTINUOUS,
            EmissionMode::Pulsed => labels::MODE_PULSED,
        }
    }
}

/// Mean power in watts. Unset inputs count as zero.
///
/// Continuous emission returns the peak power unchanged. Pulsed emission
/// returns `peak * width_s * freq_hz` rounded to one decimal place.
pub fn mean_power(
    mode: EmissionMode,
    pulse_width_us: Option<f64>,
    pulse_frequency_hz: Option<f64>,
    peak_power_w: Option<f64>,
) -> f64 {
    let peak = peak_power_w.unwrap_or(0.0);
    match mode {
        EmissionMode::Continuous => peak,
        EmissionMode::Pulsed => {
            let width_s = pulse_width_us.unwrap_or(0.0) * 1e-6;
            let raw = peak * width_s * pulse_frequency_hz.unwrap_or(0.0);
            (raw * 10.0).round() / 10.0
        }
    }
}

/// Inputs to the live mean-power readout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MeanPowerInput {
    /// Emission mode label; unset means pulsed.
    pub mode: Option<String>,
    pub pulse_width_us: Option<f64>,
    pub pulse_frequency_hz: Option<f64>,
    pub peak_power_w: Option<f64>,
}

impl MeanPowerInput {
    pub fn from_selection(selection: &DeviceSelection) -> Self {
        Self {
            mode: selection.text(params::EMISSION_MODE).map(str::to_string),
            pulse_width_us: selection.number(params::PULSE_WIDTH_US),
            pulse_frequency_hz: selection.number(params::PULSE_FREQUENCY_HZ),
            peak_power_w: selection.number(params::PEAK_POWER_W),
        }
    }

    pub fn emission_mode(&self) -> EmissionMode {
        self.mode
            .as_deref()
            .map_or(EmissionMode::Pulsed, EmissionMode::from_label)
    }

    pub fn mean_power(&self) -> f64 {
        mean_power(
            self.emission_mode(),
            self.pulse_width_us,
            self.pulse_frequency_hz,
            self.peak_power_w,
        )
    }
}
