use crate::config::Config;
use crate::evaluation::fallback::FallbackEvaluator;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Present only when an OpenRouter API key is configured.
    pub llm: Option<LlmClient>,
    pub fallback: FallbackEvaluator,
}

impl AppState {
    pub fn new(config: Config, llm: Option<LlmClient>) -> Self {
        Self {
            config,
            llm,
            fallback: FallbackEvaluator::default(),
        }
    }
}
