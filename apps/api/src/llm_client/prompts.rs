// Shared prompt fragments.
// Each adapter that calls the model defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Appended to prompts whose output is parsed as a single JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "Return the result strictly in the JSON format shown. \
    Do not add any conversational text or markdown formatting outside the JSON.";
