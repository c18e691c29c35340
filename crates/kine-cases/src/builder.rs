use kine_core::models::case::ClinicalCase;
use kine_core::models::device::DeviceKey;
use kine_core::models::rules::{DeviceRules, RuleSet};

/// Fluent constructor for catalog entries.
pub(crate) struct CaseBuilder {
    case: ClinicalCase,
}

impl CaseBuilder {
    pub(crate) fn new(id: &str, title: &str, description: &str) -> Self {
        Self {
            case: ClinicalCase {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                accepted_devices: Vec::new(),
                device_rules: Vec::new(),
                objectives: Vec::new(),
                note: None,
            },
        }
    }

    /// Accept a device and attach its reference rules.
    pub(crate) fn accept(mut self, key: impl Into<DeviceKey>, rules: RuleSet) -> Self {
        let key = key.into();
        self.case.accepted_devices.push(key);
        self.case.device_rules.push(DeviceRules::new(key, rules));
        self
    }

    /// Accept a device without any parameter constraints.
    pub(crate) fn accept_any(mut self, key: impl Into<DeviceKey>) -> Self {
        self.case.accepted_devices.push(key.into());
        self
    }

    pub(crate) fn objectives(mut self, objectives: &[&str]) -> Self {
        self.case.objectives = objectives.iter().map(|o| o.to_string()).collect();
        self
    }

    pub(crate) fn note(mut self, note: &str) -> Self {
        self.case.note = Some(note.to_string());
        self
    }

    pub(crate) fn build(self) -> ClinicalCase {
        self.case
    }
}

pub(crate) fn string_set(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| v.to_string()).collect())
}
