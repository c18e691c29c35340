use std::sync::Arc;

use kine_feedback::bedrock::BedrockModel;
use kine_feedback::composer::FeedbackComposer;
use kine_feedback::gemini::GeminiModel;
use kine_feedback::model::LanguageModel;
use kine_server::config::{LlmProvider, ServerConfig};
use kine_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let model = build_model(&config).await?;

    let composer = FeedbackComposer::new(model)
        .with_timeout(config.llm_timeout)
        .with_language(config.feedback_language.clone());

    let app = kine_server::app(AppState::new(composer));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, provider = ?config.provider, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Pick the feedback model. A missing Gemini key is not fatal: the server
/// runs and every evaluation carries the degraded feedback message.
async fn build_model(config: &ServerConfig) -> eyre::Result<Option<Arc<dyn LanguageModel>>> {
    match config.provider {
        LlmProvider::Disabled => {
            tracing::info!("feedback model disabled");
            Ok(None)
        }
        LlmProvider::Gemini => match &config.gemini_api_key {
            Some(key) => {
                let model: Arc<dyn LanguageModel> = Arc::new(GeminiModel::new(
                    key,
                    &config.gemini_model,
                    config.llm_timeout,
                )?);
                tracing::info!(model = %config.gemini_model, "using Gemini for feedback");
                Ok(Some(model))
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not set, feedback will be unavailable");
                Ok(None)
            }
        },
        LlmProvider::Bedrock => {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let model: Arc<dyn LanguageModel> =
                Arc::new(BedrockModel::new(&aws_config, &config.bedrock_model_id));
            tracing::info!(model_id = %config.bedrock_model_id, "using Bedrock for feedback");
            Ok(Some(model))
        }
    }
}
