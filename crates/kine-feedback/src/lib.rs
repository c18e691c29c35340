//! kine-feedback
//!
//! Natural-language tutor feedback on top of a validation verdict. Builds
//! the prompt, calls an external language model, and degrades to a fixed
//! message when the model is missing, slow or failing.

pub mod bedrock;
pub mod composer;
pub mod error;
pub mod gemini;
pub mod model;
pub mod prompt;
