use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_REFERER: &str = "http://localhost:8080";
const DEFAULT_APP_TITLE: &str = "CV Evaluator App";

/// Application configuration loaded from environment variables.
/// Remote evaluation is enabled only when `OPENROUTER_API_KEY` is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
    pub openrouter_base_url: String,
    pub openrouter_referer: String,
    pub openrouter_app_title: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            openrouter_model: env_or("OPENROUTER_MODEL", DEFAULT_MODEL),
            openrouter_base_url: env_or("OPENROUTER_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            openrouter_referer: env_or("OPENROUTER_REFERER", DEFAULT_REFERER),
            openrouter_app_title: env_or("OPENROUTER_APP_TITLE", DEFAULT_APP_TITLE),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

/// Blank values count as unset so an empty `OPENROUTER_API_KEY=` line disables remote mode.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Rule-based-only configuration used by handler tests.
    pub fn for_tests() -> Self {
        Config {
            openrouter_api_key: None,
            openrouter_model: DEFAULT_MODEL.to_string(),
            openrouter_base_url: DEFAULT_BASE_URL.to_string(),
            openrouter_referer: DEFAULT_REFERER.to_string(),
            openrouter_app_title: DEFAULT_APP_TITLE.to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }
    }
}
