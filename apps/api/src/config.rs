use std::time::Duration;

use crate::llm_client::DEFAULT_BASE_URL;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Application configuration loaded from environment variables.
///
/// Nothing is mandatory. A missing API key is reported by `main` and the
/// service still starts; calls then fail at the remote side.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub generation_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        }

        let gemini_api_key = non_empty_env("GEMINI_API_KEY").or_else(|| non_empty_env("API_KEY"));

        let gemini_base_url =
            non_empty_env("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = parse_env::<u64>("GENERATION_TIMEOUT_SECS", 120)?;

        Ok(Config {
            gemini_api_key,
            gemini_base_url,
            generation_timeout: Duration::from_secs(timeout_secs),
            port: parse_env::<u16>("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match non_empty_env(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue(key.to_string(), raw)),
    }
}
