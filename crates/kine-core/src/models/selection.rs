use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::device::{Device, DeviceKey};
use crate::error::CoreError;

/// A submitted parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ParamValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Flag(b) => write!(f, "{b}"),
            ParamValue::Number(n) => write!(f, "{n}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Flag(b)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

/// The student's submitted configuration for one validation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeviceSelection {
    pub device: Device,
    /// Variant name; only meaningful for devices with variants.
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
    /// Free-text clinical reasoning.
    #[serde(default)]
    pub justification: Option<String>,
}

impl DeviceSelection {
    pub fn new(device: Device) -> Self {
        Self {
            device,
            subtype: None,
            parameters: BTreeMap::new(),
            justification: None,
        }
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    pub fn with_param(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }

    pub fn with_justification(mut self, text: impl Into<String>) -> Self {
        self.justification = Some(text.into());
        self
    }

    /// Canonical key for rule lookup and whitelist testing.
    pub fn key(&self) -> Result<DeviceKey, CoreError> {
        DeviceKey::normalize(self.device, self.subtype.as_deref())
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).and_then(ParamValue::as_number)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).and_then(ParamValue::as_text)
    }
}
