//! Fallback chain: try the optional primary evaluator, fall back to rules on failure.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::evaluation::fallback::FallbackEvaluator;
use crate::evaluation::models::{EvaluationResult, EvaluationSource};
use crate::evaluation::{EvaluationError, Evaluator};

/// How a request wants to be evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Remote model when configured, rule-based otherwise.
    #[default]
    Auto,
    RuleBased,
}

/// Why the primary evaluator was skipped, reported alongside a fallback result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFailure {
    pub code: String,
    pub message: String,
}

impl From<&EvaluationError> for RemoteFailure {
    fn from(e: &EvaluationError) -> Self {
        Self {
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    pub result: EvaluationResult,
    pub source: EvaluationSource,
    pub remote_failure: Option<RemoteFailure>,
}

pub struct CvEvaluator {
    primary: Option<Box<dyn Evaluator>>,
    fallback: FallbackEvaluator,
}

impl CvEvaluator {
    pub fn rule_based(fallback: FallbackEvaluator) -> Self {
        Self {
            primary: None,
            fallback,
        }
    }

    pub fn with_primary(primary: Box<dyn Evaluator>, fallback: FallbackEvaluator) -> Self {
        Self {
            primary: Some(primary),
            fallback,
        }
    }

    /// Always produces a result: a primary failure degrades to the rule-based path.
    pub async fn evaluate(&self, raw_text: &str) -> EvaluationOutcome {
        let mut remote_failure = None;

        if let Some(primary) = &self.primary {
            match primary.evaluate(raw_text).await {
                Ok(result) => {
                    return EvaluationOutcome {
                        result,
                        source: primary.source(),
                        remote_failure: None,
                    }
                }
                Err(e) => {
                    warn!("Primary evaluation failed, falling back to rule-based analysis: {e}");
                    remote_failure = Some(RemoteFailure::from(&e));
                }
            }
        }

        let result = self.fallback.analyze(raw_text);
        debug!("Rule-based evaluation complete: overall_score={}", result.overall_score);

        EvaluationOutcome {
            result,
            source: EvaluationSource::RuleBased,
            remote_failure,
        }
    }
}
