use std::net::SocketAddr;
use std::time::Duration;

use eyre::{WrapErr, eyre};
use kine_feedback::composer::{DEFAULT_LANGUAGE, DEFAULT_TIMEOUT};
use kine_feedback::gemini;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:7860";
pub const DEFAULT_BEDROCK_MODEL: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Which language model backs the feedback composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    Gemini,
    Bedrock,
    Disabled,
}

impl LlmProvider {
    fn parse(value: &str) -> eyre::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(LlmProvider::Gemini),
            "bedrock" => Ok(LlmProvider::Bedrock),
            "none" | "off" | "disabled" => Ok(LlmProvider::Disabled),
            other => Err(eyre!("unknown KINE_LLM_PROVIDER: {other}")),
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub provider: LlmProvider,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub bedrock_model_id: String,
    pub llm_timeout: Duration,
    pub feedback_language: String,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut bind_addr: SocketAddr = get("KINE_BIND_ADDR")
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .wrap_err("invalid KINE_BIND_ADDR")?;
        if let Some(port) = get("PORT") {
            bind_addr.set_port(port.trim().parse().wrap_err("invalid PORT")?);
        }

        let provider = match get("KINE_LLM_PROVIDER") {
            Some(value) => LlmProvider::parse(&value)?,
            None => LlmProvider::Gemini,
        };

        let llm_timeout = match get("KINE_LLM_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .wrap_err("invalid KINE_LLM_TIMEOUT_SECS")?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            bind_addr,
            provider,
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
            bedrock_model_id: get("KINE_BEDROCK_MODEL_ID")
                .unwrap_or_else(|| DEFAULT_BEDROCK_MODEL.to_string()),
            llm_timeout,
            feedback_language: get("KINE_FEEDBACK_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }
}
