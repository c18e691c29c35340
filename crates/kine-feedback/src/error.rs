use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
