pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::extraction::MAX_DOCUMENT_BYTES;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/evaluations", post(handlers::handle_evaluate))
        .route(
            "/api/v1/evaluations/document",
            post(handlers::handle_evaluate_document),
        )
        .route("/api/v1/taxonomy", get(handlers::handle_taxonomy))
        .route("/api/v1/taxonomy/:role", get(handlers::handle_role_skills))
        .route("/api/v1/models", get(handlers::handle_models))
        .layer(DefaultBodyLimit::max(MAX_DOCUMENT_BYTES))
        .with_state(state)
}
