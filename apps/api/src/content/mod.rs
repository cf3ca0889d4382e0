// GEO content drafting for a single opportunity, plus markdown export of the result.
// All model calls go through llm_client, never directly to Gemini.

pub mod adapter;
pub mod export;
pub mod models;
pub mod prompts;
