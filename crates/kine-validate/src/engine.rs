use kine_core::models::case::ClinicalCase;
use kine_core::models::finding::{Finding, FindingSubject, ValidationVerdict};
use kine_core::models::selection::DeviceSelection;
use tracing::{debug, info};

use crate::evaluators;

/// Validate a selection against the catalog case `case_id`.
///
/// An unknown id or the placeholder sentinel is caller misuse: it yields a
/// single case-level fail finding and `is_correct == false` rather than an
/// error.
pub fn validate(case_id: &str, selection: &DeviceSelection) -> ValidationVerdict {
    match kine_cases::get_case(case_id) {
        Some(case) if !kine_cases::is_placeholder(&case.id) => validate_case(case, selection),
        _ => {
            debug!(case_id, "validation requested without a selectable case");
            ValidationVerdict {
                case_id: case_id.to_string(),
                is_correct: false,
                findings: vec![Finding::fail(
                    FindingSubject::Case,
                    "No clinical case selected. Pick a case before validating.",
                )],
            }
        }
    }
}

/// Validate a selection against an already resolved case.
///
/// The device check always comes first. Parameter rules only run when the
/// device is accepted; warnings never affect `is_correct`.
pub fn validate_case(case: &ClinicalCase, selection: &DeviceSelection) -> ValidationVerdict {
    let key = match selection.key() {
        Ok(key) => key,
        Err(e) => {
            return ValidationVerdict {
                case_id: case.id.clone(),
                is_correct: false,
                findings: vec![Finding::fail(FindingSubject::Device, e.to_string())],
            };
        }
    };

    let mut findings = Vec::new();
    let accepted = case.accepts(&key);

    if accepted {
        findings.push(Finding::pass(
            FindingSubject::Device,
            format!("Correct device: {key} is a good choice for this case."),
        ));
        if let Some(rules) = case.rules_for(&key) {
            findings.extend(evaluators::evaluate(rules, selection));
        }
    } else {
        findings.push(Finding::fail(
            FindingSubject::Device,
            format!(
                "Inappropriate device: you selected {key}, but this case is better treated \
                 with: {}.",
                case.accepted_labels().join(", ")
            ),
        ));
    }

    let is_correct = accepted && !findings.iter().any(Finding::is_fail);

    info!(
        case_id = %case.id,
        device = %key,
        accepted,
        is_correct,
        findings = findings.len(),
        "treatment validated"
    );

    ValidationVerdict {
        case_id: case.id.clone(),
        is_correct,
        findings,
    }
}
