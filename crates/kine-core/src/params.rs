//! Well-known parameter names submitted by the presentation layer.
//!
//! Evaluators only look at these keys; anything else in a selection is
//! carried through to the feedback summary but never checked.

// Electrotherapy
pub const FREQUENCY_HZ: &str = "frequency_hz";
pub const PULSE_DURATION_US: &str = "pulse_duration_us";
pub const CARRIER_HZ: &str = "carrier_hz";
pub const RATIO: &str = "ratio";
pub const BURST_FREQUENCY_HZ: &str = "burst_frequency_hz";
pub const AMF_HZ: &str = "amf_hz";
pub const VECTOR: &str = "vector";
pub const POLARITY: &str = "polarity";
pub const PHASE_TIME_MS: &str = "phase_time_ms";
pub const PAUSE_TIME_MS: &str = "pause_time_ms";

// Thermotherapy
pub const DUTY_CYCLE: &str = "duty_cycle";
pub const US_FREQUENCY: &str = "us_frequency";
pub const INTENSITY_W_CM2: &str = "intensity_w_cm2";
pub const METHOD: &str = "method";
pub const EMISSION_MODE: &str = "emission_mode";
pub const PULSE_WIDTH_US: &str = "pulse_width_us";
pub const PULSE_FREQUENCY_HZ: &str = "pulse_frequency_hz";
pub const PEAK_POWER_W: &str = "peak_power_w";
/// Derived from the four shortwave inputs, never submitted. Subject of
/// dose findings.
pub const MEAN_POWER_W: &str = "mean_power_w";
pub const DISTANCE_CM: &str = "distance_cm";
pub const SESSION_TIME_MIN: &str = "session_time_min";
