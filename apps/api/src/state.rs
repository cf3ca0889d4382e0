use std::sync::Arc;

use crate::session::controller::SessionController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single session. Owns the analysis, the draft, and the model seam.
    pub session: Arc<SessionController>,
}
