//! kine-core
//!
//! Pure domain types for the physical-agents simulator: devices, rule sets,
//! student selections, findings and verdicts. No I/O; this is the shared
//! vocabulary of the catalog, the validator and the feedback composer.

pub mod error;
pub mod labels;
pub mod models;
pub mod params;
