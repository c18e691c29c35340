//! AWS Bedrock via the Converse API.
//!
//! Credentials come from the AWS default chain in the `SdkConfig` the
//! caller loads. The model id must be an inference profile id such as
//! `us.anthropic.claude-sonnet-4-20250514-v1:0`; bare foundation model ids
//! are rejected by Converse for on-demand throughput.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message};
use tracing::debug;

use crate::error::FeedbackError;
use crate::model::LanguageModel;

pub struct BedrockModel {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockModel {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_bedrockruntime::Client::new(config),
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl LanguageModel for BedrockModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, prompt: &str) -> Result<String, FeedbackError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| FeedbackError::Invocation(e.to_string()))?;

        debug!(model_id = %self.model_id, prompt_len = prompt.len(), "calling Bedrock");

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .send()
            .await
            .map_err(|e| FeedbackError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| FeedbackError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}
