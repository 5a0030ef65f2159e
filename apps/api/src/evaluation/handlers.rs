//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::evaluation::models::{EvaluationResult, EvaluationSource, ScoreBand};
use crate::evaluation::orchestrator::{CvEvaluator, EvaluationMode, RemoteFailure};
use crate::evaluation::remote::RemoteEvaluator;
use crate::evaluation::taxonomy::{RoleSkills, SkillTaxonomy};
use crate::extraction::extract_text;
use crate::llm_client::models::{find_model, ModelInfo, SUPPORTED_MODELS};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub text: String,
    #[serde(default)]
    pub mode: EvaluationMode,
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateQuery {
    #[serde(default)]
    pub mode: EvaluationMode,
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub evaluation: EvaluationResult,
    pub source: EvaluationSource,
    pub status: ScoreBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_failure: Option<RemoteFailure>,
}

#[derive(Debug, Serialize)]
pub struct TaxonomyResponse {
    pub roles: &'static [RoleSkills],
}

#[derive(Debug, Serialize)]
pub struct RoleSkillsResponse {
    pub role: String,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: &'static [ModelInfo],
    pub default_model: String,
    pub remote_enabled: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/evaluations
///
/// Evaluates already-extracted CV text.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let Json(request) = payload?;
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let evaluator = build_evaluator(&state, request.mode, request.model.as_deref())?;
    Ok(Json(run(&evaluator, &request.text).await))
}

/// POST /api/v1/evaluations/document
///
/// Extracts text from the raw request body (PDF or UTF-8 text) and evaluates it.
/// Nothing is scored when extraction fails.
pub async fn handle_evaluate_document(
    State(state): State<AppState>,
    query: Result<Query<EvaluateQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<EvaluationResponse>, AppError> {
    let Query(query) = query?;
    let evaluator = build_evaluator(&state, query.mode, query.model.as_deref())?;

    let text = tokio::task::spawn_blocking(move || extract_text(&body))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;
    tracing::info!("Extracted {} characters from uploaded document", text.chars().count());

    Ok(Json(run(&evaluator, &text).await))
}

/// GET /api/v1/taxonomy
pub async fn handle_taxonomy() -> Json<TaxonomyResponse> {
    Json(TaxonomyResponse {
        roles: SkillTaxonomy::default().roles(),
    })
}

/// GET /api/v1/taxonomy/:role
pub async fn handle_role_skills(
    Path(role): Path<String>,
) -> Result<Json<RoleSkillsResponse>, AppError> {
    let skills = SkillTaxonomy::default()
        .skills_for_role(&role)
        .ok_or_else(|| AppError::NotFound(format!("Role '{role}' not found")))?;
    Ok(Json(RoleSkillsResponse { role, skills }))
}

/// GET /api/v1/models
pub async fn handle_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: SUPPORTED_MODELS,
        default_model: state.config.openrouter_model.clone(),
        remote_enabled: state.llm.is_some(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Picks the evaluation chain for one request.
fn build_evaluator(
    state: &AppState,
    mode: EvaluationMode,
    model: Option<&str>,
) -> Result<CvEvaluator, AppError> {
    if let Some(model) = model {
        if find_model(model).is_none() {
            return Err(AppError::Validation(format!("unsupported model '{model}'")));
        }
    }

    let evaluator = match (mode, &state.llm) {
        (EvaluationMode::Auto, Some(llm)) => {
            let model = model.unwrap_or(state.config.openrouter_model.as_str());
            CvEvaluator::with_primary(
                Box::new(RemoteEvaluator::new(llm.clone(), model)),
                state.fallback,
            )
        }
        _ => CvEvaluator::rule_based(state.fallback),
    };
    Ok(evaluator)
}

async fn run(evaluator: &CvEvaluator, text: &str) -> EvaluationResponse {
    let outcome = evaluator.evaluate(text).await;
    EvaluationResponse {
        status: ScoreBand::from_score(outcome.result.overall_score),
        evaluation: outcome.result,
        source: outcome.source,
        remote_failure: outcome.remote_failure,
    }
}
