use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown device: {0}")]
    UnknownDevice(String),

    #[error("unknown variant '{subtype}' for device '{device}'")]
    UnknownVariant { device: String, subtype: String },
}
