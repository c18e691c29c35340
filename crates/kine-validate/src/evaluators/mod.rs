//! Parameter rule evaluators, one per device family.
//!
//! Each evaluator only checks parameters present in both the submission and
//! the rule set, in the order the rule set declares them.

mod checks;
mod faradic;
mod infrared;
mod interferential;
mod russian;
mod shortwave;
mod tens;
mod ultrasound;

use kine_core::models::finding::Finding;
use kine_core::models::rules::RuleSet;
use kine_core::models::selection::DeviceSelection;

/// Evaluate `selection` against `rules`, returning findings in rule order.
pub fn evaluate(rules: &RuleSet, selection: &DeviceSelection) -> Vec<Finding> {
    match rules {
        RuleSet::Tens(r) => tens::evaluate(r, selection),
        RuleSet::Russian(r) => russian::evaluate(r, selection),
        RuleSet::Interferential(r) => interferential::evaluate(r, selection),
        RuleSet::Faradic(r) => faradic::evaluate(r, selection),
        RuleSet::Ultrasound(r) => ultrasound::evaluate(r, selection),
        RuleSet::Shortwave(r) => shortwave::evaluate(r, selection),
        RuleSet::Infrared(r) => infrared::evaluate(r, selection),
        RuleSet::None => Vec::new(),
    }
}
