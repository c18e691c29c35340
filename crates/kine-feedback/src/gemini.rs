//! Google Gemini via the `generateContent` REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::FeedbackError;
use crate::model::LanguageModel;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiModel {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiModel {
    /// Build a client whose every request is bounded by `timeout`.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FeedbackError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Point the client at a different API root (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[async_trait]
impl LanguageModel for GeminiModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, FeedbackError> {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
        });

        debug!(model = %self.model, prompt_len = prompt.len(), "calling Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(FeedbackError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)?;
        let reply = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| FeedbackError::ResponseParse("no text in response".to_string()))?;

        Ok(reply)
    }
}
