//! kine-validate
//!
//! Deterministic rules check of a student's device selection against a
//! case's reference solution. Pure and synchronous: no I/O, no state kept
//! between calls.

mod engine;
pub mod evaluators;

pub use engine::{validate, validate_case};
