use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::device::DeviceKey;
use super::rules::{DeviceRules, RuleSet};

/// A clinical case and its reference solution. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalCase {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Clinically appropriate devices, in order of preference.
    pub accepted_devices: Vec<DeviceKey>,
    pub device_rules: Vec<DeviceRules>,
    /// Clinical goal keywords of the reference solution.
    pub objectives: Vec<String>,
    pub note: Option<String>,
}

impl ClinicalCase {
    /// Whether any accepted-list entry admits `key`.
    pub fn accepts(&self, key: &DeviceKey) -> bool {
        self.accepted_devices.iter().any(|accepted| accepted.admits(key))
    }

    /// Rules for `key`, falling back to rules keyed by the bare device.
    pub fn rules_for(&self, key: &DeviceKey) -> Option<&RuleSet> {
        self.device_rules
            .iter()
            .find(|r| r.key == *key)
            .or_else(|| {
                self.device_rules
                    .iter()
                    .find(|r| r.key.variant.is_none() && r.key.device == key.device)
            })
            .map(|r| &r.rules)
    }

    /// Accepted devices rendered with their canonical labels.
    pub fn accepted_labels(&self) -> Vec<String> {
        self.accepted_devices.iter().map(ToString::to_string).collect()
    }
}
