//! kine-cases
//!
//! The bundled clinical case catalog. Pure data, built once and never
//! mutated, shared read-only by every request.

mod builder;
mod catalog;

use kine_core::models::case::ClinicalCase;

pub use catalog::PLACEHOLDER_CASE_ID;

/// Every catalog entry in catalog order, including the placeholder.
pub fn all_cases() -> &'static [ClinicalCase] {
    &catalog::CASES
}

/// Cases a student can actually pick (the placeholder excluded).
pub fn selectable_cases() -> impl Iterator<Item = &'static ClinicalCase> {
    all_cases().iter().filter(|c| !is_placeholder(&c.id))
}

/// Look up a case by ID.
pub fn get_case(id: &str) -> Option<&'static ClinicalCase> {
    all_cases().iter().find(|c| c.id == id)
}

/// Whether `id` is the "no case selected" sentinel.
pub fn is_placeholder(id: &str) -> bool {
    id == PLACEHOLDER_CASE_ID
}
