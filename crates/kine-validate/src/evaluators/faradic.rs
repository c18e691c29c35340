use kine_core::models::finding::{Finding, Severity};
use kine_core::models::rules::{FaradicRules, SEARCH_PHASE_TIME_CUTOFF_MS};
use kine_core::models::selection::DeviceSelection;
use kine_core::params;

use super::checks::{self, Param};

const POLARITY: Param = Param {
    name: params::POLARITY,
    label: "Polarity",
    unit: "",
};

const PHASE: Param = Param {
    name: params::PHASE_TIME_MS,
    label: "Phase time",
    unit: "ms",
};

const PAUSE: Param = Param {
    name: params::PAUSE_TIME_MS,
    label: "Pause time",
    unit: "ms",
};

pub(super) fn evaluate(rules: &FaradicRules, selection: &DeviceSelection) -> Vec<Finding> {
    let mut out = Vec::new();
    let phase = selection.number(PHASE.name);

    checks::equals_text(
        &mut out,
        &POLARITY,
        selection.text(POLARITY.name),
        rules.polarity.as_deref(),
        Severity::Fail,
    );

    // Chronaxie testing probes with short pulses; long phases mean the
    // student is treating instead of searching for the threshold.
    if rules.search_low_phase_time == Some(true)
        && let Some(phase) = phase
        && phase > SEARCH_PHASE_TIME_CUTOFF_MS
    {
        out.push(Finding::parameter(
            Severity::Fail,
            PHASE.name,
            format!(
                "Strategy: a {phase} ms phase is too long. Search with low phase times \
                 (≤ {SEARCH_PHASE_TIME_CUTOFF_MS} ms) to find the chronaxie."
            ),
        ));
    }

    checks::one_of_number(
        &mut out,
        &PHASE,
        phase,
        rules.phase_times.as_deref(),
        Severity::Warning,
    );
    checks::one_of_number(
        &mut out,
        &PAUSE,
        selection.number(PAUSE.name),
        rules.pause_times.as_deref(),
        Severity::Warning,
    );
    out
}
