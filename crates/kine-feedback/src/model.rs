use async_trait::async_trait;

use crate::error::FeedbackError;

/// An external text-generation service.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Model identifier, for logs.
    fn model_id(&self) -> &str;

    /// Generate a reply to a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String, FeedbackError>;
}
