//! CV Evaluation — pluggable evaluators that all produce one `EvaluationResult`.
//!
//! `FallbackEvaluator` is the rule-based baseline and never fails.
//! `RemoteEvaluator` asks a chat-completion model and may fail on transport.
//! `CvEvaluator` chains them: remote first when configured, rule-based otherwise.

use async_trait::async_trait;
use thiserror::Error;

use crate::evaluation::models::{EvaluationResult, EvaluationSource};
use crate::llm_client::LlmError;

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod orchestrator;
pub mod prompts;
pub mod recommend;
pub mod remote;
pub mod scoring;
pub mod taxonomy;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Remote evaluation failed: {0}")]
    Remote(#[from] LlmError),
}

impl EvaluationError {
    pub fn code(&self) -> &'static str {
        match self {
            EvaluationError::Remote(e) => e.code(),
        }
    }
}

/// The evaluator trait. Implement this to add a backend without touching
/// the orchestrator or the handlers.
#[async_trait]
pub trait Evaluator: Send + Sync {
    fn source(&self) -> EvaluationSource;

    async fn evaluate(&self, raw_text: &str) -> Result<EvaluationResult, EvaluationError>;
}
