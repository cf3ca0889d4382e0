//! Analysis Request Adapter: asks the model to research a site and its competitors.

use tracing::{debug, info, warn};

use crate::analysis::models::AnalysisResult;
use crate::analysis::normalizer::parse_analysis;
use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_TEMPERATURE};
use crate::errors::AdapterError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{CallLimits, GenerateOptions, GenerativeModel, LlmError};

pub fn build_analysis_prompt(url: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
        .replace("{url}", url)
}

/// Web search on, low temperature, free-form output (search grounding and
/// schema-constrained output cannot be combined).
pub fn analysis_options() -> GenerateOptions {
    GenerateOptions {
        web_search: true,
        temperature: Some(ANALYSIS_TEMPERATURE),
        response_schema: None,
    }
}

/// Runs one analysis for an already-normalized `url`.
pub async fn analyze_website(
    model: &dyn GenerativeModel,
    url: &str,
    limits: &CallLimits,
) -> Result<AnalysisResult, AdapterError> {
    let prompt = build_analysis_prompt(url);
    let options = analysis_options();

    let text = limits
        .run(model.generate(&prompt, &options))
        .await
        .map_err(|e| match e {
            LlmError::EmptyContent => AdapterError::EmptyResponse,
            other => AdapterError::UpstreamFailure(upstream_message(other)),
        })?;

    debug!("Raw analysis response for {url}: {text}");

    let result = parse_analysis(&text, url).inspect_err(|e| {
        warn!("Analysis response for {url} could not be parsed: {e}");
    })?;

    info!(
        "Analysis for {} parsed: {} competitors, {} opportunities",
        result.url,
        result.competitors.len(),
        result.opportunities.len()
    );

    Ok(result)
}

/// Prefers the upstream's own message (e.g. "quota exceeded") over our wrapper text.
fn upstream_message(err: LlmError) -> String {
    match err {
        LlmError::Api { message, .. } => message,
        other => other.to_string(),
    }
}
