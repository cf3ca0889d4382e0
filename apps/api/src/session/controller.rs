//! Application State Controller: the single owner of the session's status and payloads.
//!
//! State is one tagged union, so a draft request without an underlying analysis
//! cannot be represented. Every outbound call follows the same lifecycle:
//!
//!   begin_* (lock, validate, transition, release) → adapter call (no lock held)
//!   → complete_* (lock, apply if the request is still current)
//!
//! A completion whose request id no longer matches the current state (after a
//! reset) is dropped.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::adapter::analyze_website;
use crate::analysis::models::{AnalysisResult, Opportunity};
use crate::analysis::url::normalize_target_url;
use crate::content::adapter::generate_draft;
use crate::content::export::{download_filename, to_markdown};
use crate::content::models::{ContentDraft, DraftRequest};
use crate::errors::AppError;
use crate::llm_client::{CallLimits, GenerativeModel};
use crate::session::view::{project, SessionSnapshot};

/// The five externally visible statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApplicationStatus {
    Idle,
    Analyzing,
    Results,
    GeneratingContent,
    Error,
}

/// Identity and limits of the one outstanding request.
#[derive(Debug, Clone)]
pub struct RequestHandle {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    limits: CallLimits,
}

impl RequestHandle {
    fn new(deadline: Option<Duration>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            limits: CallLimits::new(deadline),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PendingAnalysis {
    pub handle: RequestHandle,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct PendingDraft {
    pub handle: RequestHandle,
    pub request: DraftRequest,
}

#[derive(Debug, Clone)]
pub enum SessionState {
    Idle,
    Analyzing {
        handle: RequestHandle,
        url: String,
    },
    Results {
        analysis: Arc<AnalysisResult>,
        draft: Option<ContentDraft>,
        /// Set when the last draft attempt failed.
        notice: Option<String>,
    },
    GeneratingContent {
        analysis: Arc<AnalysisResult>,
        opportunity: Opportunity,
        handle: RequestHandle,
    },
    Error {
        message: String,
    },
}

impl SessionState {
    pub fn status(&self) -> ApplicationStatus {
        match self {
            SessionState::Idle => ApplicationStatus::Idle,
            SessionState::Analyzing { .. } => ApplicationStatus::Analyzing,
            SessionState::Results { .. } => ApplicationStatus::Results,
            SessionState::GeneratingContent { .. } => ApplicationStatus::GeneratingContent,
            SessionState::Error { .. } => ApplicationStatus::Error,
        }
    }

    fn in_flight(&self) -> Option<&RequestHandle> {
        match self {
            SessionState::Analyzing { handle, .. }
            | SessionState::GeneratingContent { handle, .. } => Some(handle),
            _ => None,
        }
    }
}

pub struct SessionController {
    model: Arc<dyn GenerativeModel>,
    call_deadline: Option<Duration>,
    state: Mutex<SessionState>,
}

impl SessionController {
    pub fn new(model: Arc<dyn GenerativeModel>, call_deadline: Option<Duration>) -> Self {
        Self {
            model,
            call_deadline,
            state: Mutex::new(SessionState::Idle),
        }
    }

    pub async fn status(&self) -> ApplicationStatus {
        self.state.lock().await.status()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        project(&*self.state.lock().await, Utc::now())
    }

    // ────────────────────────────────────────────────────────────────────────
    // Analysis
    // ────────────────────────────────────────────────────────────────────────

    /// Idle → Analyzing. Normalizes the user's input into the target URL.
    pub async fn begin_analysis(&self, input: &str) -> Result<PendingAnalysis, AppError> {
        let mut state = self.state.lock().await;
        reject_if_busy(&state)?;
        if !matches!(*state, SessionState::Idle) {
            return Err(AppError::Conflict(
                "Reset the session before starting a new analysis".to_string(),
            ));
        }

        let url = normalize_target_url(input)?;
        let handle = RequestHandle::new(self.call_deadline);
        info!(request_id = %handle.id, "Starting analysis of {url}");

        *state = SessionState::Analyzing {
            handle: handle.clone(),
            url: url.clone(),
        };

        Ok(PendingAnalysis { handle, url })
    }

    /// Runs the analysis call, then Analyzing → Results | Error.
    pub async fn complete_analysis(&self, pending: PendingAnalysis) {
        let outcome =
            analyze_website(self.model.as_ref(), &pending.url, &pending.handle.limits).await;

        let mut state = self.state.lock().await;
        if !matches!(&*state, SessionState::Analyzing { handle, .. } if handle.id == pending.handle.id)
        {
            info!(request_id = %pending.handle.id, "Discarding stale analysis result");
            return;
        }

        *state = match outcome {
            Ok(analysis) => {
                info!(request_id = %pending.handle.id, "Analysis complete for {}", pending.url);
                SessionState::Results {
                    analysis: Arc::new(analysis),
                    draft: None,
                    notice: None,
                }
            }
            Err(e) => {
                warn!(request_id = %pending.handle.id, "Analysis failed for {}: {e}", pending.url);
                SessionState::Error {
                    message: e.user_message(),
                }
            }
        };
    }

    /// `begin_analysis` followed by `complete_analysis`, awaited in place.
    pub async fn analyze(&self, input: &str) -> Result<ApplicationStatus, AppError> {
        let pending = self.begin_analysis(input).await?;
        self.complete_analysis(pending).await;
        Ok(self.status().await)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Draft generation
    // ────────────────────────────────────────────────────────────────────────

    /// Results → GeneratingContent for one opportunity of the current analysis.
    pub async fn begin_generation(&self, opportunity_id: &str) -> Result<PendingDraft, AppError> {
        let mut state = self.state.lock().await;
        reject_if_busy(&state)?;

        let SessionState::Results { analysis, .. } = &*state else {
            return Err(AppError::Conflict(
                "No analysis results to draft content from".to_string(),
            ));
        };

        let opportunity = analysis
            .opportunity(opportunity_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Opportunity {opportunity_id} not found")))?;
        let analysis = Arc::clone(analysis);

        let request = DraftRequest::from(&opportunity);
        let handle = RequestHandle::new(self.call_deadline);
        info!(
            request_id = %handle.id,
            "Drafting optimized content for {:?} (keyword {:?})",
            request.topic,
            request.target_keyword
        );

        *state = SessionState::GeneratingContent {
            analysis,
            opportunity,
            handle: handle.clone(),
        };

        Ok(PendingDraft { handle, request })
    }

    /// Runs the draft call, then GeneratingContent → Results (draft attached, or a notice).
    pub async fn complete_generation(&self, pending: PendingDraft) {
        let outcome =
            generate_draft(self.model.as_ref(), &pending.request, &pending.handle.limits).await;

        let mut state = self.state.lock().await;
        let analysis = match &*state {
            SessionState::GeneratingContent {
                analysis, handle, ..
            } if handle.id == pending.handle.id => Arc::clone(analysis),
            _ => {
                info!(request_id = %pending.handle.id, "Discarding stale draft result");
                return;
            }
        };

        *state = match outcome {
            Ok(draft) => SessionState::Results {
                analysis,
                draft: Some(draft),
                notice: None,
            },
            Err(e) => {
                warn!(request_id = %pending.handle.id, "Draft generation failed: {e}");
                SessionState::Results {
                    analysis,
                    draft: None,
                    notice: Some(e.user_message()),
                }
            }
        };
    }

    /// `begin_generation` followed by `complete_generation`, awaited in place.
    pub async fn generate(&self, opportunity_id: &str) -> Result<ApplicationStatus, AppError> {
        let pending = self.begin_generation(opportunity_id).await?;
        self.complete_generation(pending).await;
        Ok(self.status().await)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Navigation
    // ────────────────────────────────────────────────────────────────────────

    /// Back to the dashboard: drops the attached draft and any notice.
    pub async fn close_draft(&self) -> Result<(), AppError> {
        let mut state = self.state.lock().await;
        match &mut *state {
            SessionState::Results { draft, notice, .. } => {
                *draft = None;
                *notice = None;
                Ok(())
            }
            _ => Err(AppError::Conflict("No draft is being displayed".to_string())),
        }
    }

    /// Any state → Idle, discarding analysis and draft. Cancels an outstanding request.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        if let Some(handle) = state.in_flight() {
            info!(request_id = %handle.id, "Reset cancels in-flight request");
            handle.limits.cancel.cancel();
        }
        *state = SessionState::Idle;
    }

    /// Fires the cancellation hook of the outstanding request. Its completion then
    /// takes the normal failure path for its kind.
    pub async fn cancel(&self) -> Result<(), AppError> {
        let state = self.state.lock().await;
        let handle = state
            .in_flight()
            .ok_or_else(|| AppError::Conflict("No request in progress".to_string()))?;
        info!(request_id = %handle.id, "Cancelling in-flight request");
        handle.limits.cancel.cancel();
        Ok(())
    }

    /// `(filename, markdown)` for the displayed draft.
    pub async fn draft_markdown(&self) -> Result<(String, String), AppError> {
        match &*self.state.lock().await {
            SessionState::Results {
                draft: Some(draft), ..
            } => Ok((download_filename(draft), to_markdown(draft))),
            _ => Err(AppError::NotFound("No draft available".to_string())),
        }
    }
}

fn reject_if_busy(state: &SessionState) -> Result<(), AppError> {
    match state.in_flight() {
        Some(handle) => Err(AppError::Conflict(format!(
            "Request {} is still in progress",
            handle.id
        ))),
        None => Ok(()),
    }
}
