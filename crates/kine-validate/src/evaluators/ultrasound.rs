use kine_core::models::finding::{Finding, Severity};
use kine_core::models::rules::UltrasoundRules;
use kine_core::models::selection::DeviceSelection;
use kine_core::params;

use super::checks::{self, Param};

const DUTY_CYCLE: Param = Param {
    name: params::DUTY_CYCLE,
    label: "Duty cycle",
    unit: "",
};

const FREQUENCY: Param = Param {
    name: params::US_FREQUENCY,
    label: "Frequency",
    unit: "",
};

const INTENSITY: Param = Param {
    name: params::INTENSITY_W_CM2,
    label: "Intensity",
    unit: "W/cm²",
};

pub(super) fn evaluate(rules: &UltrasoundRules, selection: &DeviceSelection) -> Vec<Finding> {
    let mut out = Vec::new();

    checks::equals_text(
        &mut out,
        &DUTY_CYCLE,
        selection.text(DUTY_CYCLE.name),
        rules.duty_cycle.as_deref(),
        Severity::Fail,
    );
    checks::equals_text(
        &mut out,
        &FREQUENCY,
        selection.text(FREQUENCY.name),
        rules.frequency.as_deref(),
        Severity::Fail,
    );
    checks::max(
        &mut out,
        &INTENSITY,
        selection.number(INTENSITY.name),
        rules.intensity_max,
        Severity::Warning,
    );
    out
}
