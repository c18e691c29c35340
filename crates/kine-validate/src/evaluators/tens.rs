use kine_core::models::finding::{Finding, Severity};
use kine_core::models::rules::TensRules;
use kine_core::models::selection::DeviceSelection;
use kine_core::params;

use super::checks::{self, Param};

const FREQUENCY: Param = Param {
    name: params::FREQUENCY_HZ,
    label: "Frequency",
    unit: "Hz",
};

const DURATION: Param = Param {
    name: params::PULSE_DURATION_US,
    label: "Pulse duration",
    unit: "µs",
};

pub(super) fn evaluate(rules: &TensRules, selection: &DeviceSelection) -> Vec<Finding> {
    let mut out = Vec::new();
    let frequency = selection.number(FREQUENCY.name);
    let duration = selection.number(DURATION.name);

    checks::min(&mut out, &FREQUENCY, frequency, rules.freq_min, Severity::Fail);
    checks::max(&mut out, &FREQUENCY, frequency, rules.freq_max, Severity::Fail);
    checks::min(&mut out, &DURATION, duration, rules.duration_min, Severity::Fail);
    checks::max(&mut out, &DURATION, duration, rules.duration_max, Severity::Fail);
    out
}
