//! Content Draft Adapter: drafts one GEO-optimized article for a selected opportunity.
//!
//! The call is schema-constrained, so the response is parsed directly with no
//! extraction step. Every failure collapses to `UpstreamFailure`.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::content::models::{ContentDraft, DraftRequest};
use crate::content::prompts::DRAFT_PROMPT_TEMPLATE;
use crate::errors::AdapterError;
use crate::llm_client::{CallLimits, GenerateOptions, GenerativeModel};

pub const DRAFT_FAILURE_MESSAGE: &str = "Failed to generate content. Please try again.";

pub fn build_draft_prompt(request: &DraftRequest) -> String {
    DRAFT_PROMPT_TEMPLATE
        .replace("{topic}", &request.topic)
        .replace("{keyword}", &request.target_keyword)
        .replace("{content_type}", &request.content_type)
}

/// Gemini response schema for `ContentDraft`: exactly four fields, all required.
pub fn draft_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "metaDescription": { "type": "STRING" },
            "targetKeywords": { "type": "ARRAY", "items": { "type": "STRING" } },
            "content": { "type": "STRING" }
        },
        "required": ["title", "metaDescription", "targetKeywords", "content"],
        "propertyOrdering": ["title", "metaDescription", "targetKeywords", "content"]
    })
}

pub async fn generate_draft(
    model: &dyn GenerativeModel,
    request: &DraftRequest,
    limits: &CallLimits,
) -> Result<ContentDraft, AdapterError> {
    let prompt = build_draft_prompt(request);
    let options = GenerateOptions {
        web_search: false,
        temperature: None,
        response_schema: Some(draft_response_schema()),
    };

    let draft = async {
        let text = limits.run(model.generate(&prompt, &options)).await?;
        let draft: ContentDraft = serde_json::from_str(&text)?;
        Ok::<_, anyhow::Error>(draft)
    }
    .await
    .map_err(|e| {
        warn!("Draft generation for {:?} failed: {e}", request.topic);
        AdapterError::UpstreamFailure(DRAFT_FAILURE_MESSAGE.to_string())
    })?;

    info!(
        "Drafted {:?} ({} chars, {} keywords)",
        draft.title,
        draft.content.len(),
        draft.target_keywords.len()
    );

    Ok(draft)
}
