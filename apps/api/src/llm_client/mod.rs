/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions go through the `GenerativeModel` trait, implemented here
/// by `LlmClient` (and by a scripted stub in tests).
///
/// Model: gemini-3-pro-preview (hardcoded; do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub mod lifecycle;
pub mod prompts;
#[cfg(test)]
pub mod stub;

pub use lifecycle::CallLimits;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls.
pub const MODEL: &str = "gemini-3-pro-preview";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Gemini API key is not configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("LLM call exceeded its {0:?} deadline")]
    DeadlineExceeded(Duration),

    #[error("LLM call was cancelled")]
    Cancelled,
}

/// Per-call knobs for a `generateContent` request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    /// Enables the Google Search grounding tool.
    pub web_search: bool,
    pub temperature: Option<f32>,
    /// When set, requests `application/json` output constrained to this schema.
    pub response_schema: Option<Value>,
}

/// The model seam. `AppState` carries an `Arc<dyn GenerativeModel>` so tests can
/// swap in a scripted backend without touching the controller or handlers.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Sends one prompt and returns the model's text. Empty text is `EmptyContent`.
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<GeminiTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiTool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
}

impl<'a> GeminiRequest<'a> {
    fn new(prompt: &'a str, options: &'a GenerateOptions) -> Self {
        let tools = if options.web_search {
            vec![GeminiTool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };

        let generation_config = if options.temperature.is_some() || options.response_schema.is_some()
        {
            Some(GenerationConfig {
                temperature: options.temperature,
                response_mime_type: options
                    .response_schema
                    .as_ref()
                    .map(|_| "application/json"),
                response_schema: options.response_schema.as_ref(),
            })
        } else {
            None
        };

        Self {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart { text: prompt }],
            }],
            tools,
            generation_config,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GeminiResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The Gemini client used by all adapters.
///
/// No retries and no client-side timeout: deadlines and cancellation are applied
/// per call by `CallLimits`.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Makes a raw `generateContent` call, returning the full response object.
    pub async fn call(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<GeminiResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
        let request_body = GeminiRequest::new(prompt, options);

        let response = self
            .client
            .post(format!("{GEMINI_API_BASE}/{MODEL}:generateContent"))
            .header("x-goog-api-key", api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let gemini_response: GeminiResponse = response.json().await?;

        if let Some(usage) = &gemini_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}, finish_reason={:?}",
                usage.prompt_token_count,
                usage.candidates_token_count,
                gemini_response
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.as_deref())
            );
        }

        Ok(gemini_response)
    }
}

#[async_trait]
impl GenerativeModel for LlmClient {
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String, LlmError> {
        let response = self.call(prompt, options).await?;
        response
            .text()
            .filter(|t| !t.trim().is_empty())
            .ok_or(LlmError::EmptyContent)
    }
}

/// Pulls the human-readable message out of a Gemini error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<GeminiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_search_and_temperature() {
        let options = GenerateOptions {
            web_search: true,
            temperature: Some(0.3),
            response_schema: None,
        };
        let body = serde_json::to_value(GeminiRequest::new("hello", &options)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["tools"][0], json!({ "googleSearch": {} }));
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.3).abs() < 1e-6);
        assert!(body["generationConfig"].get("responseMimeType").is_none());
    }

    #[test]
    fn test_request_with_schema_sets_json_mime_type() {
        let schema = json!({ "type": "OBJECT" });
        let options = GenerateOptions {
            response_schema: Some(schema.clone()),
            ..Default::default()
        };
        let body = serde_json::to_value(GeminiRequest::new("draft", &options)).unwrap();

        assert!(body.get("tools").is_none());
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
    }

    #[test]
    fn test_request_without_options_omits_generation_config() {
        let options = GenerateOptions::default();
        let body = serde_json::to_value(GeminiRequest::new("plain", &options)).unwrap();
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"a\":" }, { "text": " 1}" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 4 }
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("{\"a\": 1}"));
        assert_eq!(response.usage_metadata.unwrap().candidates_token_count, 4);
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_api_error_message_extracted_from_body() {
        let body = r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(api_error_message(body), "quota exceeded");
        assert_eq!(api_error_message("gateway down"), "gateway down");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_at_first_use() {
        let client = LlmClient::new(None);
        let err = client
            .generate("anything", &GenerateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }
}
