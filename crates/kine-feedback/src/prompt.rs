//! Prompt assembly for the tutor model.

use kine_core::models::case::ClinicalCase;
use kine_core::models::selection::DeviceSelection;

const TUTOR_ROLE: &str = "You are an expert professor of kinesiology and physiotherapy \
reviewing a student's treatment choice in a physical-agents simulator.";

/// Flat one-paragraph description of what the student submitted.
///
/// Parameters are listed by name in a stable (sorted) order.
pub fn student_summary(selection: &DeviceSelection) -> String {
    let device = match selection.key() {
        Ok(key) => key.to_string(),
        Err(_) => match &selection.subtype {
            Some(subtype) => format!("{} ({subtype})", selection.device.label()),
            None => selection.device.label().to_string(),
        },
    };

    let mut summary = format!("Device: {device}.");
    if !selection.parameters.is_empty() {
        let params = selection
            .parameters
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        summary.push_str(&format!(" Parameters: {params}."));
    }
    if let Some(justification) = selection
        .justification
        .as_deref()
        .map(str::trim)
        .filter(|j| !j.is_empty())
    {
        summary.push_str(&format!(" Justification: {justification}"));
    }
    summary
}

/// Build the full tutor prompt.
///
/// The technical findings come from the deterministic validator and are the
/// primary basis for the model's judgment.
pub fn build_prompt(
    case: &ClinicalCase,
    student_summary: &str,
    technical_summary: &str,
    language: &str,
) -> String {
    let mut prompt = String::from(TUTOR_ROLE);
    prompt.push_str("\n\n<clinical_case>\n");
    prompt.push_str(&format!("{}\n{}\n", case.title, case.description));
    prompt.push_str("</clinical_case>\n\n<expected_solution>\n");
    prompt.push_str(&format!(
        "Devices: {}\n",
        case.accepted_labels().join(", ")
    ));
    if !case.objectives.is_empty() {
        prompt.push_str(&format!("Objectives: {}\n", case.objectives.join(", ")));
    }
    if let Some(note) = &case.note {
        prompt.push_str(&format!("Note: {note}\n"));
    }
    prompt.push_str("</expected_solution>\n\n<student_answer>\n");
    prompt.push_str(student_summary);
    prompt.push_str("\n</student_answer>\n\n<technical_findings>\n");
    prompt.push_str(technical_summary);
    prompt.push_str("\n</technical_findings>\n\n");
    prompt.push_str(&format!(
        "Your task:\n\
         1. Base your judgment on the technical findings above, not on your own independent \
         clinical opinion.\n\
         2. If there are errors, briefly explain the physiology behind them.\n\
         3. If the answer is correct, congratulate the student and add one interesting \
         clinical fact.\n\
         4. Keep it to four sentences at most.\n\
         Answer in {language}."
    ));
    prompt
}
