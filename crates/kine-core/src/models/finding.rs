use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Pass,
    Fail,
    /// Sub-optimal but not disqualifying. Never affects correctness.
    Warning,
}

impl Severity {
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Fail => "FAIL",
            Severity::Warning => "WARNING",
        }
    }
}

/// What a finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum FindingSubject {
    /// Caller misuse: no case selected or unknown case id.
    Case,
    Device,
    Parameter { name: String },
}

/// One evaluated constraint outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Finding {
    pub severity: Severity,
    pub subject: FindingSubject,
    pub message: String,
}

impl Finding {
    pub fn pass(subject: FindingSubject, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Pass,
            subject,
            message: message.into(),
        }
    }

    pub fn fail(subject: FindingSubject, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Fail,
            subject,
            message: message.into(),
        }
    }

    pub fn warning(subject: FindingSubject, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            subject,
            message: message.into(),
        }
    }

    /// Shorthand for a parameter-level finding.
    pub fn parameter(severity: Severity, name: &str, message: impl Into<String>) -> Self {
        Self {
            severity,
            subject: FindingSubject::Parameter {
                name: name.to_string(),
            },
            message: message.into(),
        }
    }

    pub fn is_fail(&self) -> bool {
        self.severity == Severity::Fail
    }
}

/// Aggregate result of one validation request.
///
/// `is_correct` is true iff the device was accepted and no finding has
/// [`Severity::Fail`]. Findings are ordered: device check first, then
/// parameter checks in rule order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationVerdict {
    pub case_id: String,
    pub is_correct: bool,
    pub findings: Vec<Finding>,
}

impl ValidationVerdict {
    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Fail)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// One line per finding, prefixed with its severity marker.
    pub fn technical_summary(&self) -> String {
        self.findings
            .iter()
            .map(|f| format!("[{}] {}", f.severity.marker(), f.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
