use kine_core::models::finding::{Finding, Severity};
use kine_core::models::rules::InterferentialRules;
use kine_core::models::selection::DeviceSelection;
use kine_core::params;

use super::checks::{self, Param};

const CARRIER: Param = Param {
    name: params::CARRIER_HZ,
    label: "Carrier",
    unit: "Hz",
};

const VECTOR: Param = Param {
    name: params::VECTOR,
    label: "Vector",
    unit: "",
};

const AMF: Param = Param {
    name: params::AMF_HZ,
    label: "AMF",
    unit: "Hz",
};

pub(super) fn evaluate(rules: &InterferentialRules, selection: &DeviceSelection) -> Vec<Finding> {
    let mut out = Vec::new();
    let carrier = selection.number(CARRIER.name);
    let amf = selection.number(AMF.name);

    checks::equals_number(&mut out, &CARRIER, carrier, rules.carrier, Severity::Fail);
    checks::min(&mut out, &CARRIER, carrier, rules.carrier_min, Severity::Fail);
    checks::max(&mut out, &CARRIER, carrier, rules.carrier_max, Severity::Fail);
    // A different sweep is sub-optimal, not disqualifying.
    checks::equals_text(
        &mut out,
        &VECTOR,
        selection.text(VECTOR.name),
        rules.vector.as_deref(),
        Severity::Warning,
    );
    checks::min(&mut out, &AMF, amf, rules.amf_min, Severity::Fail);
    checks::max(&mut out, &AMF, amf, rules.amf_max, Severity::Fail);
    out
}
