use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure kinds reported by the analysis and draft adapters.
///
/// The controller never inspects the kind beyond picking a view; it only
/// shows `user_message()`.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("upstream returned no text")]
    EmptyResponse,

    #[error("upstream returned malformed JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("upstream failure: {0}")]
    UpstreamFailure(String),
}

pub const MALFORMED_MESSAGE: &str = "Received malformed data from AI agent. Please try again.";
pub const EMPTY_MESSAGE: &str = "No analysis data received from the AI agent.";
pub const ANALYSIS_FALLBACK_MESSAGE: &str = "Failed to analyze website. Please try again.";

impl AdapterError {
    /// The message shown to the end user.
    pub fn user_message(&self) -> String {
        match self {
            AdapterError::EmptyResponse => EMPTY_MESSAGE.to_string(),
            AdapterError::MalformedResponse(_) => MALFORMED_MESSAGE.to_string(),
            AdapterError::UpstreamFailure(msg) if msg.trim().is_empty() => {
                ANALYSIS_FALLBACK_MESSAGE.to_string()
            }
            AdapterError::UpstreamFailure(msg) => msg.clone(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => {
                tracing::warn!("Rejected session transition: {msg}");
                (StatusCode::CONFLICT, "CONFLICT", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_response_has_tailored_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = AdapterError::MalformedResponse(parse_err);
        assert_eq!(err.user_message(), MALFORMED_MESSAGE);
    }

    #[test]
    fn test_upstream_failure_preserves_message() {
        let err = AdapterError::UpstreamFailure("quota exceeded".to_string());
        assert_eq!(err.user_message(), "quota exceeded");
    }

    #[test]
    fn test_upstream_failure_without_message_uses_default() {
        let err = AdapterError::UpstreamFailure("  ".to_string());
        assert_eq!(err.user_message(), ANALYSIS_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let response = AppError::Conflict("busy".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
