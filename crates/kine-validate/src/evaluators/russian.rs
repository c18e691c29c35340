use kine_core::models::finding::{Finding, Severity};
use kine_core::models::rules::RussianRules;
use kine_core::models::selection::DeviceSelection;
use kine_core::params;

use super::checks::{self, Param};

const CARRIER: Param = Param {
    name: params::CARRIER_HZ,
    label: "Carrier",
    unit: "Hz",
};

const RATIO: Param = Param {
    name: params::RATIO,
    label: "On:off ratio",
    unit: "",
};

const BURST: Param = Param {
    name: params::BURST_FREQUENCY_HZ,
    label: "Burst frequency",
    unit: "Hz",
};

pub(super) fn evaluate(rules: &RussianRules, selection: &DeviceSelection) -> Vec<Finding> {
    let mut out = Vec::new();
    let burst = selection.number(BURST.name);

    checks::equals_number(
        &mut out,
        &CARRIER,
        selection.number(CARRIER.name),
        rules.carrier,
        Severity::Fail,
    );
    checks::one_of_text(
        &mut out,
        &RATIO,
        selection.text(RATIO.name),
        rules.ratios.as_deref(),
        Severity::Fail,
    );
    checks::min(&mut out, &BURST, burst, rules.burst_min, Severity::Fail);
    checks::max(&mut out, &BURST, burst, rules.burst_max, Severity::Fail);
    out
}
