use anyhow::Result;
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use tracing::debug;

const SPEECH_URL: &str = "https://api.openai.com/v1/audio/speech";

/// Contract for the component that turns question text into speech.
#[async_trait]
pub trait Speaker: Send + Sync {
    /// Synthesizes the given text and returns base64-encoded audio bytes.
    async fn synthesize(&self, text: &str) -> Result<String>;
}

pub struct OpenAiSpeaker {
    client: Client,
    api_key: String,
    model: String,
    voice: String,
}

impl OpenAiSpeaker {
    pub fn new(api_key: String, model: String, voice: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            voice,
        }
    }
}

#[async_trait]
impl Speaker for OpenAiSpeaker {
    async fn synthesize(&self, text: &str) -> Result<String> {
        debug!(model = %self.model, voice = %self.voice, "requesting speech synthesis");
        let body = speech_body(&self.model, &self.voice, text);

        let audio = self
            .client
            .post(SPEECH_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(base64::engine::general_purpose::STANDARD.encode(audio))
    }
}

fn speech_body(model: &str, voice: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "voice": voice,
        "input": text,
        "response_format": "mp3"
    })
}
