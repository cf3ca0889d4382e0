// Website analysis: prompt, outbound call, and the normalization boundary
// between free-form model text and `AnalysisResult`.
// All model calls go through llm_client, never directly to Gemini.

pub mod adapter;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod url;
