//! Request lifecycle for outbound model calls: an optional deadline plus a
//! cancellation hook, applied at the boundary of every call.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::llm_client::LlmError;

/// Bounds a single outbound call.
///
/// `deadline: None` means the call runs until the upstream answers, however long
/// that takes.
#[derive(Debug, Clone, Default)]
pub struct CallLimits {
    pub deadline: Option<Duration>,
    pub cancel: CancellationToken,
}

impl CallLimits {
    pub fn new(deadline: Option<Duration>) -> Self {
        Self {
            deadline,
            cancel: CancellationToken::new(),
        }
    }

    /// Drives `call` to completion unless the deadline passes or the token fires first.
    pub async fn run<T, F>(&self, call: F) -> Result<T, LlmError>
    where
        F: Future<Output = Result<T, LlmError>>,
    {
        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout(deadline, call)
                    .await
                    .unwrap_or(Err(LlmError::DeadlineExceeded(deadline))),
                None => call.await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(LlmError::Cancelled),
            result = bounded => result,
        }
    }
}
