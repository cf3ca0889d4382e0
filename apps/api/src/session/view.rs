//! Projects controller state onto the view a client should render.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;
use crate::content::export::{download_filename, to_markdown};
use crate::content::models::ContentDraft;
use crate::session::controller::{ApplicationStatus, SessionState};
use crate::session::dashboard::{summarize, DashboardSummary};

#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SessionView {
    Landing,
    Loading {
        message: String,
    },
    ErrorPanel {
        message: String,
    },
    Dashboard {
        analysis: AnalysisResult,
        summary: DashboardSummary,
        notice: Option<String>,
    },
    DraftViewer {
        draft: ContentDraft,
        markdown: String,
        filename: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub status: ApplicationStatus,
    pub request_id: Option<Uuid>,
    #[serde(flatten)]
    pub view: SessionView,
}

/// Loading copy for an analysis, advancing with elapsed time.
pub fn analysis_loading_message(elapsed: chrono::Duration) -> &'static str {
    match elapsed.num_milliseconds() {
        ms if ms < 2_500 => "Scanning website for products and blog content...",
        ms if ms < 5_000 => "Analyzing competitor blog strategies...",
        _ => "Identifying content gaps and missing topics...",
    }
}

pub fn project(state: &SessionState, now: DateTime<Utc>) -> SessionSnapshot {
    let (request_id, view) = match state {
        SessionState::Idle => (None, SessionView::Landing),
        SessionState::Analyzing { handle, .. } => (
            Some(handle.id),
            SessionView::Loading {
                message: analysis_loading_message(now - handle.started_at).to_string(),
            },
        ),
        SessionState::GeneratingContent {
            opportunity,
            handle,
            ..
        } => (
            Some(handle.id),
            SessionView::Loading {
                message: format!("Drafting optimized content for \"{}\"...", opportunity.title),
            },
        ),
        SessionState::Error { message } => (
            None,
            SessionView::ErrorPanel {
                message: message.clone(),
            },
        ),
        SessionState::Results {
            draft: Some(draft), ..
        } => (
            None,
            SessionView::DraftViewer {
                draft: draft.clone(),
                markdown: to_markdown(draft),
                filename: download_filename(draft),
            },
        ),
        SessionState::Results {
            analysis,
            draft: None,
            notice,
        } => (
            None,
            SessionView::Dashboard {
                analysis: AnalysisResult::clone(analysis),
                summary: summarize(analysis),
                notice: notice.clone(),
            },
        ),
    };

    SessionSnapshot {
        status: state.status(),
        request_id,
        view,
    }
}
