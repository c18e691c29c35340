use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Top-level menu grouping of the treatment devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DeviceFamily {
    Electrotherapy,
    Thermotherapy,
}

impl DeviceFamily {
    pub fn label(self) -> &'static str {
        match self {
            DeviceFamily::Electrotherapy => "Electroterapia",
            DeviceFamily::Thermotherapy => "Termoterapia",
        }
    }
}

/// A physical-therapy treatment device.
///
/// Serialized as a snake_case id. Deserialization goes through [`FromStr`],
/// so the catalog's display label is accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Device {
    Tens,
    Russian,
    Interferential,
    Faradic,
    Ultrasound,
    Shortwave,
    Infrared,
    Microcurrent,
    HighVoltage,
}

impl Device {
    pub const ALL: [Device; 9] = [
        Device::Tens,
        Device::Russian,
        Device::Interferential,
        Device::Faradic,
        Device::Microcurrent,
        Device::HighVoltage,
        Device::Ultrasound,
        Device::Shortwave,
        Device::Infrared,
    ];

    /// Stable id used in JSON (matches the serde representation).
    pub fn id(self) -> &'static str {
        match self {
            Device::Tens => "tens",
            Device::Russian => "russian",
            Device::Interferential => "interferential",
            Device::Faradic => "faradic",
            Device::Ultrasound => "ultrasound",
            Device::Shortwave => "shortwave",
            Device::Infrared => "infrared",
            Device::Microcurrent => "microcurrent",
            Device::HighVoltage => "high_voltage",
        }
    }

    /// Display label. Part of the catalog contract.
    pub fn label(self) -> &'static str {
        match self {
            Device::Tens => "TENS",
            Device::Russian => "Rusa",
            Device::Interferential => "TIF",
            Device::Faradic => "Farádica",
            Device::Ultrasound => "Ultrasonido",
            Device::Shortwave => "Onda Corta",
            Device::Infrared => "Infrarrojo",
            Device::Microcurrent => "Microcorriente",
            Device::HighVoltage => "Alto Voltaje",
        }
    }

    pub fn family(self) -> DeviceFamily {
        match self {
            Device::Ultrasound | Device::Shortwave | Device::Infrared => {
                DeviceFamily::Thermotherapy
            }
            _ => DeviceFamily::Electrotherapy,
        }
    }

    pub fn has_variants(self) -> bool {
        !self.variants().is_empty()
    }

    pub fn variants(self) -> &'static [FaradicVariant] {
        match self {
            Device::Faradic => &FaradicVariant::ALL,
            _ => &[],
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Device {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Device::ALL
            .into_iter()
            .find(|d| d.id() == s || d.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownDevice(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Device {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Sub-mode of the faradic current device.
///
/// Deserializes from its id or label, like [`FaradicVariant::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FaradicVariant {
    Trabert,
    Rectangular,
    Triangular,
}

impl FaradicVariant {
    pub const ALL: [FaradicVariant; 3] = [
        FaradicVariant::Trabert,
        FaradicVariant::Rectangular,
        FaradicVariant::Triangular,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FaradicVariant::Trabert => "trabert",
            FaradicVariant::Rectangular => "rectangular",
            FaradicVariant::Triangular => "triangular",
        }
    }

    /// Parse a variant from its id or label, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        FaradicVariant::ALL
            .into_iter()
            .find(|v| v.id() == wanted || v.label().to_lowercase() == wanted)
    }

    pub fn label(self) -> &'static str {
        match self {
            FaradicVariant::Trabert => "Träbert",
            FaradicVariant::Rectangular => "Rectangular",
            FaradicVariant::Triangular => "Triangular",
        }
    }
}

impl<'de> Deserialize<'de> for FaradicVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        FaradicVariant::from_name(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown faradic variant: {raw}")))
    }
}

/// Canonical two-level device key: device plus optional variant.
///
/// Used both for whitelist membership and for rule lookup. Renders as
/// `"Farádica (Träbert)"` for variant keys and the bare label otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeviceKey {
    pub device: Device,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<FaradicVariant>,
}

impl DeviceKey {
    pub const fn bare(device: Device) -> Self {
        Self {
            device,
            variant: None,
        }
    }

    pub const fn with_variant(device: Device, variant: FaradicVariant) -> Self {
        Self {
            device,
            variant: Some(variant),
        }
    }

    /// Reconcile a raw UI selection into its canonical key.
    ///
    /// Devices without variants ignore the subtype entirely. For variant
    /// devices a blank subtype yields the bare key; an unrecognized one is
    /// an error.
    pub fn normalize(device: Device, subtype: Option<&str>) -> Result<Self, CoreError> {
        if !device.has_variants() {
            return Ok(Self::bare(device));
        }
        match subtype.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(Self::bare(device)),
            Some(s) => FaradicVariant::from_name(s)
                .map(|v| Self::with_variant(device, v))
                .ok_or_else(|| CoreError::UnknownVariant {
                    device: device.label().to_string(),
                    subtype: s.to_string(),
                }),
        }
    }

    /// Whether this accepted-list entry admits `candidate`.
    ///
    /// A bare entry admits every selection of its device, whatever the
    /// variant. A variant entry admits only that exact variant.
    pub fn admits(&self, candidate: &DeviceKey) -> bool {
        self.device == candidate.device
            && (self.variant.is_none() || self.variant == candidate.variant)
    }
}

impl From<Device> for DeviceKey {
    fn from(device: Device) -> Self {
        Self::bare(device)
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            Some(v) => write!(f, "{} ({})", self.device.label(), v.label()),
            None => f.write_str(self.device.label()),
        }
    }
}
