use kine_core::models::finding::{Finding, Severity};
use kine_core::models::rules::InfraredRules;
use kine_core::models::selection::DeviceSelection;
use kine_core::params;

use super::checks::{self, Param};

const DISTANCE: Param = Param {
    name: params::DISTANCE_CM,
    label: "Distance",
    unit: "cm",
};

const TIME: Param = Param {
    name: params::SESSION_TIME_MIN,
    label: "Session time",
    unit: "min",
};

pub(super) fn evaluate(rules: &InfraredRules, selection: &DeviceSelection) -> Vec<Finding> {
    let mut out = Vec::new();

    // Too close is a burn risk.
    checks::min(
        &mut out,
        &DISTANCE,
        selection.number(DISTANCE.name),
        rules.distance_min,
        Severity::Warning,
    );
    checks::min(
        &mut out,
        &TIME,
        selection.number(TIME.name),
        rules.time_min,
        Severity::Warning,
    );
    out
}
