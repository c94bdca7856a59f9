//! HTTP routes.

use crate::{
    AnalyzeBody, AnalyzeResponse, ApiError, AppState, ConversationView, DeleteResponse,
    GenerateLatexBody,
};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use placard_design::{ConversationId, DesignReply};
use serde_json::json;
use tracing::instrument;

/// Creates the API router.
///
/// `/generate-sign` is kept as an alias of `/generate-latex` for older clients.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/generate-latex", post(generate_latex))
        .route("/generate-sign", post(generate_latex))
        .route("/analyze-brand-guidelines", post(analyze_brand_guidelines))
        .route(
            "/conversation/:id",
            get(get_conversation).delete(delete_conversation),
        )
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Runs one stage of a design conversation.
#[instrument(skip_all)]
async fn generate_latex(
    State(state): State<AppState>,
    body: Result<Json<GenerateLatexBody>, JsonRejection>,
) -> Result<Json<DesignReply>, ApiError> {
    let Json(body) = body?;
    let request = body.into_design_request()?;
    let reply = state.orchestrator.handle(request).await?;
    Ok(Json(reply))
}

/// Turns a guideline PDF into a brand prompt.
#[instrument(skip_all)]
async fn analyze_brand_guidelines(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeBody>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(body) = body?;
    let prompt = state
        .analyzer
        .analyze(&body.pdf_url, body.brand_name.as_deref())
        .await?;
    Ok(Json(AnalyzeResponse::success(prompt)))
}

/// Returns a conversation's turns and current LaTeX.
#[instrument(skip(state))]
async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConversationView>, ApiError> {
    let conversation = state
        .orchestrator
        .store()
        .snapshot(&ConversationId::new(id))
        .await?;
    Ok(Json(conversation.into()))
}

/// Forgets a conversation.
#[instrument(skip(state))]
async fn delete_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.orchestrator.delete(&ConversationId::new(id)).await?;
    Ok(Json(DeleteResponse::deleted()))
}
