use serde::{Deserialize, Serialize};

use crate::analysis::models::Opportunity;

/// A generated long-form article. Exactly the four fields the response schema requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDraft {
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Intended to stay under 160 characters; not enforced locally.
    pub meta_description: String,
    pub target_keywords: Vec<String>,
}

/// Inputs for one draft, taken from the selected opportunity.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRequest {
    pub topic: String,
    pub target_keyword: String,
    pub content_type: String,
}

impl From<&Opportunity> for DraftRequest {
    fn from(opportunity: &Opportunity) -> Self {
        Self {
            topic: opportunity.title.clone(),
            target_keyword: opportunity.target_keyword.clone(),
            content_type: opportunity.opportunity_type.as_str().to_string(),
        }
    }
}
