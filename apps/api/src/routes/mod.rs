pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route("/api/v1/session/reset", post(handlers::handle_reset))
        .route("/api/v1/session/cancel", post(handlers::handle_cancel))
        .route("/api/v1/session/draft", delete(handlers::handle_close_draft))
        .route(
            "/api/v1/session/draft/markdown",
            get(handlers::handle_download_draft),
        )
        // Analysis & drafting
        .route("/api/v1/analysis", post(handlers::handle_start_analysis))
        .route(
            "/api/v1/analysis/opportunities/:id/draft",
            post(handlers::handle_start_draft),
        )
        .with_state(state)
}
