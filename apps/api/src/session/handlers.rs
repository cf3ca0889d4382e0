//! Axum route handlers for the session API.
//!
//! Starting a request answers `202 Accepted` with the snapshot taken right after the
//! transition; the outbound call completes on a spawned task and clients poll
//! `GET /api/v1/session`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::session::view::SessionSnapshot;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot().await)
}

/// POST /api/v1/analysis
pub async fn handle_start_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let pending = state.session.begin_analysis(&request.url).await?;
    let snapshot = state.session.snapshot().await;

    let session = Arc::clone(&state.session);
    tokio::spawn(async move { session.complete_analysis(pending).await });

    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}

/// POST /api/v1/analysis/opportunities/:id/draft
pub async fn handle_start_draft(
    State(state): State<AppState>,
    Path(opportunity_id): Path<String>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let pending = state.session.begin_generation(&opportunity_id).await?;
    let snapshot = state.session.snapshot().await;

    let session = Arc::clone(&state.session);
    tokio::spawn(async move { session.complete_generation(pending).await });

    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}

/// DELETE /api/v1/session/draft
pub async fn handle_close_draft(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    state.session.close_draft().await?;
    Ok(Json(state.session.snapshot().await))
}

/// POST /api/v1/session/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<SessionSnapshot> {
    state.session.reset().await;
    Json(state.session.snapshot().await)
}

/// POST /api/v1/session/cancel
pub async fn handle_cancel(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    state.session.cancel().await?;
    Ok(Json(state.session.snapshot().await))
}

/// GET /api/v1/session/draft/markdown
///
/// The displayed draft as a markdown attachment.
pub async fn handle_download_draft(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let (filename, markdown) = state.session.draft_markdown().await?;
    let disposition = format!("attachment; filename=\"{}\"", filename.replace('"', ""));

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        markdown,
    ))
}
