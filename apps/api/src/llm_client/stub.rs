//! Scripted `GenerativeModel` used by controller, adapter, and router tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{GenerateOptions, GenerativeModel, LlmError};

/// One scripted outcome, consumed in order.
pub enum Scripted {
    Reply(String),
    Fail(LlmError),
    /// Never answers; only a deadline or cancellation ends the call.
    Hang,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub options: GenerateOptions,
}

#[derive(Default)]
pub struct StubModel {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubModel {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new([Scripted::Reply(text.into())])
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            options: options.clone(),
        });

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Reply(text)) if text.trim().is_empty() => Err(LlmError::EmptyContent),
            Some(Scripted::Reply(text)) => Ok(text),
            Some(Scripted::Fail(err)) => Err(err),
            Some(Scripted::Hang) => std::future::pending().await,
            None => Err(LlmError::Api {
                status: 500,
                message: "stub script exhausted".to_string(),
            }),
        }
    }
}
