mod config;
mod server;

use crate::config::Config;
use crate::server::AppState;
use anyhow::{Context, Result};
use interview_core::questioner::{OpenAiQuestioner, Questioner};
use interview_core::speaker::{OpenAiSpeaker, Speaker};
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load application configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    tracing::info!("Configuration loaded successfully. Starting interview agent...");

    // --- 3. Initialize API Clients ---
    let questioner: Option<Arc<dyn Questioner>> = config.openai_api_key.as_ref().map(|key| {
        Arc::new(OpenAiQuestioner::new(key.clone(), config.chat_model.clone()))
            as Arc<dyn Questioner>
    });
    let speaker: Option<Arc<dyn Speaker>> = config.openai_api_key.as_ref().map(|key| {
        Arc::new(OpenAiSpeaker::new(
            key.clone(),
            config.tts_model.clone(),
            config.tts_voice.clone(),
        )) as Arc<dyn Speaker>
    });
    if questioner.is_none() {
        tracing::warn!(
            "OPENAI_API_KEY is not set; step decisions will be served without question text or audio"
        );
    }

    // --- 4. Build and Serve the Router ---
    let state = AppState {
        rules: config.rules,
        questioner,
        speaker,
    };
    let app =
        server::build_router(state, &config.allowed_origins).context("Failed to build router")?;

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    tracing::info!("Interview agent listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
