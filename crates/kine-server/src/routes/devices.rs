use axum::Json;
use serde::Serialize;

use kine_core::labels;
use kine_core::models::device::{Device, DeviceFamily};

#[derive(Serialize)]
pub struct DeviceMenu {
    families: Vec<FamilyEntry>,
    choices: LabelChoices,
}

#[derive(Serialize)]
pub struct FamilyEntry {
    id: DeviceFamily,
    label: &'static str,
    devices: Vec<DeviceEntry>,
}

#[derive(Serialize)]
pub struct DeviceEntry {
    id: &'static str,
    label: &'static str,
    variants: Vec<VariantEntry>,
}

#[derive(Serialize)]
pub struct VariantEntry {
    id: &'static str,
    label: &'static str,
}

/// Exact strings the categorical parameters must be submitted with.
#[derive(Serialize)]
pub struct LabelChoices {
    duty_cycle: &'static [&'static str],
    us_frequency: &'static [&'static str],
    method: &'static [&'static str],
    emission_mode: &'static [&'static str],
    polarity: &'static [&'static str],
    ratio: &'static [&'static str],
    vector: &'static [&'static str],
}

fn family_entry(family: DeviceFamily) -> FamilyEntry {
    let devices = Device::ALL
        .into_iter()
        .filter(|d| d.family() == family)
        .map(|d| DeviceEntry {
            id: d.id(),
            label: d.label(),
            variants: d
                .variants()
                .iter()
                .map(|v| VariantEntry {
                    id: v.id(),
                    label: v.label(),
                })
                .collect(),
        })
        .collect();

    FamilyEntry {
        id: family,
        label: family.label(),
        devices,
    }
}

pub async fn device_menu() -> Json<DeviceMenu> {
    Json(DeviceMenu {
        families: vec![
            family_entry(DeviceFamily::Electrotherapy),
            family_entry(DeviceFamily::Thermotherapy),
        ],
        choices: LabelChoices {
            duty_cycle: labels::DUTY_CYCLES,
            us_frequency: labels::US_FREQUENCIES,
            method: labels::SHORTWAVE_METHODS,
            emission_mode: labels::EMISSION_MODES,
            polarity: labels::POLARITIES,
            ratio: labels::RUSSIAN_RATIOS,
            vector: labels::VECTORS,
        },
    })
}
