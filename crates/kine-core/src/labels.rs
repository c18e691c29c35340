//! Categorical labels shared between the UI's enumerated choices and the
//! case catalog. Rules compare against these strings with exact equality,
//! so both sides must use the same literals.

pub const DUTY_CYCLE_CONTINUOUS: &str = "100% (Continuo)";
pub const DUTY_CYCLE_50: &str = "50% (1:1)";
pub const DUTY_CYCLE_20: &str = "20% (1:4)";
pub const DUTY_CYCLE_10: &str = "10%";
pub const DUTY_CYCLES: &[&str] = &[
    DUTY_CYCLE_CONTINUOUS,
    DUTY_CYCLE_50,
    DUTY_CYCLE_20,
    DUTY_CYCLE_10,
];

pub const US_1_MHZ: &str = "1 MHz";
pub const US_3_MHZ: &str = "3 MHz";
pub const US_FREQUENCIES: &[&str] = &[US_1_MHZ, US_3_MHZ];

pub const METHOD_CAPACITIVE: &str = "Capacitivo (Campo Eléctrico)";
pub const METHOD_INDUCTIVE: &str = "Inductivo (Campo Magnético)";
pub const SHORTWAVE_METHODS: &[&str] = &[METHOD_CAPACITIVE, METHOD_INDUCTIVE];

pub const MODE_PULSED: &str = "Pulsado (PSWD)";
pub const MODE_CONTINUOUS: &str = "Continuo (CSWD)";
pub const EMISSION_MODES: &[&str] = &[MODE_PULSED, MODE_CONTINUOUS];

pub const POLARITY_NORMAL: &str = "Normal";
pub const POLARITY_AUTO_REVERSE: &str = "Inversión Automática";
pub const POLARITIES: &[&str] = &[POLARITY_NORMAL, POLARITY_AUTO_REVERSE];

pub const RUSSIAN_RATIOS: &[&str] = &["1:1", "1:2", "1:4", "1:5"];

pub const VECTOR_OFF: &str = "Manual/Off";
pub const VECTOR_6_6: &str = "6:6";
pub const VECTORS: &[&str] = &[VECTOR_OFF, VECTOR_6_6, "1:30:1:30", "1:1"];
