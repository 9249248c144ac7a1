//! Application Configuration Module
//!
//! Centralizes every setting the interview agent reads from the environment.
//! Configuration is loaded once at startup and passed down as immutable
//! values; nothing here is consulted again after `from_env` returns.

use interview_core::rules::{
    DEFAULT_MAX_QUESTIONS, DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_PASS_SCORE, InterviewRules,
};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use tracing::Level;

/// Origins the browser frontends are served from during development.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5000",
    "http://localhost:5173",
    "http://localhost:5174",
];

/// Holds all configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// Absent key disables question generation and speech synthesis; step
    /// decisions are still served.
    pub openai_api_key: Option<String>,
    pub chat_model: String,
    pub tts_model: String,
    pub tts_voice: String,
    pub rules: InterviewRules,
    pub allowed_origins: Vec<String>,
    pub log_level: Level,
}

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    // *   `BIND_ADDRESS`: Address and port to listen on. Defaults to "0.0.0.0:8000".
    // *   `OPENAI_API_KEY`: (Optional) Secret key for the OpenAI API. Absent
    //     means decisions are returned without question text or audio.
    // *   `CHAT_MODEL`: (Optional) Model for question generation. Defaults to "gpt-4o".
    // *   `TTS_MODEL` / `TTS_VOICE`: (Optional) Speech synthesis model and voice.
    //     Default to "tts-1" / "alloy".
    // *   `MAX_QUESTIONS`, `MIN_PASS_SCORE`, `MIN_CONFIDENCE`: (Optional)
    //     Interview step thresholds. Default to 5 / 70.0 / 0.6.
    // *   `ALLOWED_ORIGINS`: (Optional) Comma-separated CORS origins, "*" for any.
    //     Defaults to the local dev frontends.
    // *   `RUST_LOG`: (Optional) The logging level. Defaults to "INFO".
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file. This is useful for local development and is ignored if not present.
        dotenvy::dotenv().ok();

        let bind_address = parse_var(
            "BIND_ADDRESS",
            env::var("BIND_ADDRESS").ok(),
            SocketAddr::from(([0, 0, 0, 0], 8000)),
        )?;

        let openai_api_key = env::var("OPENAI_API_KEY").ok();

        let chat_model = env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
        let tts_model = env::var("TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string());
        let tts_voice = env::var("TTS_VOICE").unwrap_or_else(|_| "alloy".to_string());

        let rules = InterviewRules {
            max_questions: parse_var(
                "MAX_QUESTIONS",
                env::var("MAX_QUESTIONS").ok(),
                DEFAULT_MAX_QUESTIONS,
            )?,
            min_pass_score: parse_var(
                "MIN_PASS_SCORE",
                env::var("MIN_PASS_SCORE").ok(),
                DEFAULT_MIN_PASS_SCORE,
            )?,
            min_confidence: parse_var(
                "MIN_CONFIDENCE",
                env::var("MIN_CONFIDENCE").ok(),
                DEFAULT_MIN_CONFIDENCE,
            )?,
        };

        let allowed_origins = parse_origins(env::var("ALLOWED_ORIGINS").ok().as_deref());

        let log_level = parse_var("RUST_LOG", env::var("RUST_LOG").ok(), Level::INFO)?;

        Ok(Self {
            bind_address,
            openai_api_key,
            chat_model,
            tts_model,
            tts_voice,
            rules,
            allowed_origins,
            log_level,
        })
    }
}

/// Parses an optional raw environment value, falling back to `default` when
/// the variable is unset.
fn parse_var<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue(key.to_string(), raw)),
        None => Ok(default),
    }
}

/// Splits a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        None => DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_uses_default_when_unset() {
        let v: f32 = parse_var("MIN_PASS_SCORE", None, 70.0).unwrap();
        assert_eq!(v, 70.0);
    }

    #[test]
    fn test_parse_var_parses_and_trims() {
        let v: u32 = parse_var("MAX_QUESTIONS", Some(" 8 ".to_string()), 5).unwrap();
        assert_eq!(v, 8);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        let err = parse_var::<f32>("MIN_CONFIDENCE", Some("high".to_string()), 0.6).unwrap_err();
        let ConfigError::InvalidValue(key, raw) = err;
        assert_eq!(key, "MIN_CONFIDENCE");
        assert_eq!(raw, "high");
    }

    #[test]
    fn test_parse_var_handles_socket_addr_and_level() {
        let addr: SocketAddr = parse_var(
            "BIND_ADDRESS",
            Some("127.0.0.1:9000".to_string()),
            SocketAddr::from(([0, 0, 0, 0], 8000)),
        )
        .unwrap();
        assert_eq!(addr.port(), 9000);

        let level: Level = parse_var("RUST_LOG", Some("debug".to_string()), Level::INFO).unwrap();
        assert_eq!(level, Level::DEBUG);
    }

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins(Some("http://a.example, http://b.example ,"));
        assert_eq!(origins, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn test_parse_origins_defaults_to_dev_frontends() {
        let origins = parse_origins(None);
        assert_eq!(origins.len(), 4);
        assert!(origins.contains(&"http://localhost:5173".to_string()));
    }
}
