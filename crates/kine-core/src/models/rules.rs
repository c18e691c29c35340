//! Typed reference rules, one struct per device family.
//!
//! Every field is optional: an absent rule means "no constraint" and is
//! never reported. Each present rule is checked on its own and may emit its
//! own finding.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::device::DeviceKey;

/// Generic TENS-like electrostimulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TensRules {
    pub freq_min: Option<f64>,
    pub freq_max: Option<f64>,
    /// Pulse duration lower bound, µs.
    pub duration_min: Option<f64>,
    /// Pulse duration upper bound, µs.
    pub duration_max: Option<f64>,
}

/// Burst-modulated medium frequency (Russian current).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RussianRules {
    /// Expected carrier frequency, Hz.
    pub carrier: Option<f64>,
    /// Accepted on:off ratio labels.
    pub ratios: Option<Vec<String>>,
    pub burst_min: Option<f64>,
    pub burst_max: Option<f64>,
}

/// Dual-carrier interferential current.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct InterferentialRules {
    pub carrier: Option<f64>,
    pub carrier_min: Option<f64>,
    pub carrier_max: Option<f64>,
    /// Expected vector sweep label. A mismatch is only a warning.
    pub vector: Option<String>,
    pub amf_min: Option<f64>,
    pub amf_max: Option<f64>,
}

/// Faradic current, shared by all of its variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FaradicRules {
    pub polarity: Option<String>,
    /// Diagnostic threshold search: phase time must stay at or below
    /// [`SEARCH_PHASE_TIME_CUTOFF_MS`].
    pub search_low_phase_time: Option<bool>,
    /// Suggested protocol phase times, ms.
    pub phase_times: Option<Vec<f64>>,
    /// Suggested protocol pause times, ms.
    pub pause_times: Option<Vec<f64>>,
}

/// Phase-time cutoff for the low-time search rule, ms.
pub const SEARCH_PHASE_TIME_CUTOFF_MS: f64 = 100.0;

/// Therapeutic ultrasound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct UltrasoundRules {
    pub duty_cycle: Option<String>,
    pub frequency: Option<String>,
    /// W/cm². Exceeding it is a warning.
    pub intensity_max: Option<f64>,
}

/// Shortwave diathermy. Dose bounds apply to the derived mean power.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ShortwaveRules {
    pub method: Option<String>,
    pub dose_min_power: Option<f64>,
    pub dose_max_power: Option<f64>,
}

/// Infrared lamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct InfraredRules {
    /// cm. Closer than this is a burn-risk warning.
    pub distance_min: Option<f64>,
    /// Session length, minutes.
    pub time_min: Option<f64>,
}

/// The reference rules for one device within a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "family", rename_all = "snake_case")]
#[ts(export)]
pub enum RuleSet {
    Tens(TensRules),
    Russian(RussianRules),
    Interferential(InterferentialRules),
    Faradic(FaradicRules),
    Ultrasound(UltrasoundRules),
    Shortwave(ShortwaveRules),
    Infrared(InfraredRules),
    /// Accepted device with no parameter constraints.
    None,
}

/// A rule set bound to the device key it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeviceRules {
    pub key: DeviceKey,
    pub rules: RuleSet,
}

impl DeviceRules {
    pub fn new(key: impl Into<DeviceKey>, rules: RuleSet) -> Self {
        Self {
            key: key.into(),
            rules,
        }
    }
}
