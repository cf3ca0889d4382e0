//! Response Normalizer: turns free-form model text into a fully shaped `AnalysisResult`.
//!
//! Two stages, kept apart from any network code:
//! 1. `extract_json_payload` picks the JSON candidate out of prose / code fences.
//! 2. `normalize_analysis` defaults every field independently.
//!
//! Parsing is all-or-nothing: if the extracted text is not JSON, nothing is returned.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::analysis::models::{AnalysisResult, Competitor, Difficulty, Opportunity, OpportunityType};
use crate::errors::AdapterError;

/// Score used when the model omits a score or returns a non-numeric one.
pub const DEFAULT_SCORE: u8 = 50;

const FENCE: &str = "```";

/// Extracts the JSON candidate from raw model text.
///
/// Precedence:
/// 1. the first fenced block (optionally tagged `json`) that has a closing fence, trimmed
/// 2. the span from the first `{` to the last `}` inclusive
/// 3. the trimmed text unchanged
pub fn extract_json_payload(text: &str) -> &str {
    if let Some(block) = fenced_block(text) {
        return block;
    }

    if let (Some(first), Some(last)) = (text.find('{'), text.rfind('}')) {
        if last > first {
            return &text[first..=last];
        }
    }

    text.trim()
}

fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find(FENCE)?;
    let after_open = &text[open + FENCE.len()..];
    let body = after_open.strip_prefix("json").unwrap_or(after_open);
    let close = body.find(FENCE)?;
    Some(body[..close].trim())
}

/// Extracts, parses, and normalizes an analysis response.
///
/// A JSON syntax failure is `MalformedResponse`; nothing else can fail here.
pub fn parse_analysis(text: &str, requested_url: &str) -> Result<AnalysisResult, AdapterError> {
    let payload = extract_json_payload(text);
    let value: Value = serde_json::from_str(payload).map_err(AdapterError::MalformedResponse)?;
    Ok(normalize_analysis(&value, requested_url))
}

/// Fills safe defaults for every top-level field of a parsed analysis.
///
/// A non-object value yields an all-default result for `requested_url`.
pub fn normalize_analysis(value: &Value, requested_url: &str) -> AnalysisResult {
    let empty = Map::new();
    let root = value.as_object().unwrap_or(&empty);

    let url = non_empty_text(root.get("url")).unwrap_or_else(|| requested_url.to_string());

    AnalysisResult {
        url,
        website_score: score(root.get("websiteScore")),
        categories: string_list(root.get("categories")),
        blog_themes: string_list(root.get("blogThemes")),
        competitors: objects(root.get("competitors"))
            .map(normalize_competitor)
            .collect(),
        opportunities: normalize_opportunities(root.get("opportunities")),
    }
}

fn normalize_competitor(obj: &Map<String, Value>) -> Competitor {
    Competitor {
        name: text(obj.get("name")),
        url: text(obj.get("url")),
        top_keywords: string_list(obj.get("topKeywords")),
        strengths: string_list(obj.get("strengths")),
        visibility_score: score(obj.get("visibilityScore")),
        blog_themes: string_list(obj.get("blogThemes")),
    }
}

/// Normalizes opportunities, replacing missing or repeated ids so every id is unique.
fn normalize_opportunities(value: Option<&Value>) -> Vec<Opportunity> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut fallback_counter = 0usize;

    objects(value)
        .map(|obj| {
            let mut id = non_empty_text(obj.get("id")).unwrap_or_default();
            while id.is_empty() || seen.contains(&id) {
                fallback_counter += 1;
                id = format!("opportunity_{fallback_counter}");
            }
            seen.insert(id.clone());

            Opportunity {
                id,
                title: text(obj.get("title")),
                opportunity_type: obj
                    .get("type")
                    .and_then(Value::as_str)
                    .and_then(OpportunityType::parse)
                    .unwrap_or_default(),
                difficulty: obj
                    .get("difficulty")
                    .and_then(Value::as_str)
                    .and_then(Difficulty::parse)
                    .unwrap_or_default(),
                reason: text(obj.get("reason")),
                target_keyword: text(obj.get("targetKeyword")),
            }
        })
        .collect()
}

fn score(value: Option<&Value>) -> u8 {
    value
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(DEFAULT_SCORE)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn objects(value: Option<&Value>) -> impl Iterator<Item = &Map<String, Value>> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

/// Strings pass through; numbers are rendered (models sometimes emit numeric ids).
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    let t = text(value);
    let trimmed = t.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://example.com";

    #[test]
    fn test_fenced_block_wins_over_bare_braces() {
        let text = "Here you go {\"outer\": 1}\n```json\n{\"inner\": 2}\n```\nthanks {x}";
        assert_eq!(extract_json_payload(text), "{\"inner\": 2}");
    }

    #[test]
    fn test_untagged_fence_is_extracted() {
        let text = "```\n  {\"key\": \"value\"}  \n```";
        assert_eq!(extract_json_payload(text), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_bare_braces_span_first_to_last() {
        let text = "Sure! {\"a\": {\"b\": 1}} Hope this helps.";
        assert_eq!(extract_json_payload(text), "{\"a\": {\"b\": 1}}");
    }

    #[test]
    fn test_unclosed_fence_falls_back_to_braces() {
        let text = "```json\n{\"a\": 1}";
        assert_eq!(extract_json_payload(text), "{\"a\": 1}");
    }

    #[test]
    fn test_no_json_returns_trimmed_text() {
        assert_eq!(extract_json_payload("  no json here \n"), "no json here");
        assert_eq!(extract_json_payload("} backwards {"), "} backwards {");
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        let result = parse_analysis("{}", URL).unwrap();
        assert_eq!(result.url, URL);
        assert_eq!(result.website_score, 50);
        assert!(result.categories.is_empty());
        assert!(result.blog_themes.is_empty());
        assert!(result.competitors.is_empty());
        assert!(result.opportunities.is_empty());
    }

    #[test]
    fn test_invalid_syntax_is_malformed_response() {
        let err = parse_analysis("I could not analyze that site, sorry.", URL).unwrap_err();
        assert!(matches!(err, AdapterError::MalformedResponse(_)));

        let err = parse_analysis("```json\n{\"url\": }\n```", URL).unwrap_err();
        assert!(matches!(err, AdapterError::MalformedResponse(_)));
    }

    #[test]
    fn test_wrong_shapes_default_independently() {
        let value = json!({
            "url": "",
            "websiteScore": "high",
            "categories": "Luggage",
            "blogThemes": ["Travel", 3, null],
            "competitors": { "name": "not a list" },
            "opportunities": [42, { "title": "Packing 101" }]
        });
        let result = normalize_analysis(&value, URL);

        assert_eq!(result.url, URL);
        assert_eq!(result.website_score, 50);
        assert!(result.categories.is_empty());
        assert_eq!(result.blog_themes, vec!["Travel"]);
        assert!(result.competitors.is_empty());
        assert_eq!(result.opportunities.len(), 1);
        assert_eq!(result.opportunities[0].title, "Packing 101");
        assert_eq!(result.opportunities[0].opportunity_type, OpportunityType::Blog);
        assert_eq!(result.opportunities[0].difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_scores_are_rounded_and_clamped() {
        let value = json!({
            "websiteScore": 72.6,
            "competitors": [
                { "name": "A", "visibilityScore": 140 },
                { "name": "B", "visibilityScore": -3 },
                { "name": "C" }
            ]
        });
        let result = normalize_analysis(&value, URL);
        assert_eq!(result.website_score, 73);
        let scores: Vec<u8> = result.competitors.iter().map(|c| c.visibility_score).collect();
        assert_eq!(scores, vec![100, 0, 50]);
    }

    #[test]
    fn test_missing_and_duplicate_ids_are_made_unique() {
        let value = json!({
            "opportunities": [
                { "id": "opp_a", "title": "One" },
                { "id": "opp_a", "title": "Two" },
                { "title": "Three" },
                { "id": 7, "title": "Four" }
            ]
        });
        let result = normalize_analysis(&value, URL);
        let ids: Vec<&str> = result.opportunities.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["opp_a", "opportunity_1", "opportunity_2", "7"]);
    }

    #[test]
    fn test_normalizing_normalized_result_is_identity() {
        let value = json!({
            "url": "https://example.com",
            "websiteScore": 41,
            "categories": ["Luggage", "Backpacks"],
            "blogThemes": [],
            "competitors": [{
                "name": "Away",
                "url": "awaytravel.com",
                "topKeywords": ["carry on"],
                "strengths": ["Strong brand"],
                "visibilityScore": 88,
                "blogThemes": ["Packing guides"]
            }],
            "opportunities": [{
                "id": "opp_1",
                "title": "How to Pack a Suitcase",
                "type": "landing_page",
                "difficulty": "high",
                "reason": "Away ranks for it",
                "targetKeyword": "packing tips"
            }]
        });
        let once = normalize_analysis(&value, URL);
        let twice = normalize_analysis(&serde_json::to_value(&once).unwrap(), URL);
        assert_eq!(once, twice);
        assert_eq!(once.opportunities[0].difficulty, Difficulty::High);
        assert_eq!(once.opportunities[0].opportunity_type, OpportunityType::LandingPage);
    }

    #[test]
    fn test_top_level_array_yields_defaults() {
        let result = parse_analysis("[1, 2, 3]", URL).unwrap();
        assert_eq!(result.url, URL);
        assert_eq!(result.website_score, DEFAULT_SCORE);
        assert!(result.opportunities.is_empty());
    }
}
