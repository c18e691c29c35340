use kine_core::models::finding::{Finding, Severity};
use kine_core::models::power::MeanPowerInput;
use kine_core::models::rules::ShortwaveRules;
use kine_core::models::selection::DeviceSelection;
use kine_core::params;

use super::checks::{self, Param};

const METHOD: Param = Param {
    name: params::METHOD,
    label: "Method",
    unit: "",
};

pub(super) fn evaluate(rules: &ShortwaveRules, selection: &DeviceSelection) -> Vec<Finding> {
    let mut out = Vec::new();

    checks::equals_text(
        &mut out,
        &METHOD,
        selection.text(METHOD.name),
        rules.method.as_deref(),
        Severity::Warning,
    );

    if rules.dose_min_power.is_none() && rules.dose_max_power.is_none() {
        return out;
    }

    // Dose is judged on the derived mean power, with unset inputs as zero.
    let mean = MeanPowerInput::from_selection(selection).mean_power();

    if !mean.is_finite() {
        out.push(Finding::parameter(
            Severity::Fail,
            params::MEAN_POWER_W,
            "Invalid dose: mean power cannot be computed from the given pulse width, \
             frequency and peak power.",
        ));
        return out;
    }
    if let Some(min) = rules.dose_min_power
        && mean < min
    {
        out.push(Finding::parameter(
            Severity::Fail,
            params::MEAN_POWER_W,
            format!("Insufficient dose: mean power {mean} W. Minimum required: {min} W."),
        ));
    }
    if let Some(max) = rules.dose_max_power
        && mean > max
    {
        out.push(Finding::parameter(
            Severity::Fail,
            params::MEAN_POWER_W,
            format!("Excessive dose: mean power {mean} W. Suggested maximum: {max} W."),
        ));
    }
    out
}
