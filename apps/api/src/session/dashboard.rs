use serde::Serialize;

use crate::analysis::models::{AnalysisResult, Difficulty};

const OWN_SITE_LABEL: &str = "Your Site";
const MAX_LABEL_CHARS: usize = 15;
const CATEGORY_PREVIEW: usize = 3;
const BLOG_THEME_PREVIEW: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityEntry {
    pub label: String,
    pub score: u8,
    pub is_own_site: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorHeadline {
    pub name: String,
    pub headline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DifficultyCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Derived figures for the results dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Own site plus competitors, highest score first.
    pub ranking: Vec<VisibilityEntry>,
    pub category_preview: Vec<String>,
    pub has_blog: bool,
    pub blog_theme_preview: Vec<String>,
    pub competitor_headlines: Vec<CompetitorHeadline>,
    pub opportunity_count: usize,
    pub difficulty_counts: DifficultyCounts,
}

pub fn summarize(analysis: &AnalysisResult) -> DashboardSummary {
    let mut ranking: Vec<VisibilityEntry> = std::iter::once(VisibilityEntry {
        label: OWN_SITE_LABEL.to_string(),
        score: analysis.website_score,
        is_own_site: true,
    })
    .chain(analysis.competitors.iter().map(|c| VisibilityEntry {
        label: truncate_label(&c.name),
        score: c.visibility_score,
        is_own_site: false,
    }))
    .collect();
    // stable: ties keep own site first
    ranking.sort_by(|a, b| b.score.cmp(&a.score));

    let mut difficulty_counts = DifficultyCounts::default();
    for opportunity in &analysis.opportunities {
        match opportunity.difficulty {
            Difficulty::Low => difficulty_counts.low += 1,
            Difficulty::Medium => difficulty_counts.medium += 1,
            Difficulty::High => difficulty_counts.high += 1,
        }
    }

    DashboardSummary {
        ranking,
        category_preview: analysis.categories.iter().take(CATEGORY_PREVIEW).cloned().collect(),
        has_blog: !analysis.blog_themes.is_empty(),
        blog_theme_preview: analysis
            .blog_themes
            .iter()
            .take(BLOG_THEME_PREVIEW)
            .cloned()
            .collect(),
        competitor_headlines: analysis
            .competitors
            .iter()
            .map(|c| CompetitorHeadline {
                name: c.name.clone(),
                headline: c.headline_strength().map(str::to_string),
            })
            .collect(),
        opportunity_count: analysis.opportunities.len(),
        difficulty_counts,
    }
}

fn truncate_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        format!("{}...", name.chars().take(MAX_LABEL_CHARS).collect::<String>())
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::normalize_analysis;
    use serde_json::json;

    fn sample() -> AnalysisResult {
        normalize_analysis(
            &json!({
                "websiteScore": 40,
                "categories": ["Luggage", "Backpacks", "Accessories", "Bags"],
                "blogThemes": [],
                "competitors": [
                    { "name": "Samsonite International", "visibilityScore": 70, "strengths": ["Brand"] },
                    { "name": "Away", "visibilityScore": 90 },
                    { "name": "Monos", "visibilityScore": 40 }
                ],
                "opportunities": [
                    { "id": "a", "difficulty": "Low" },
                    { "id": "b", "difficulty": "High" },
                    { "id": "c", "difficulty": "High" }
                ]
            }),
            "https://example.com",
        )
    }

    #[test]
    fn test_ranking_sorted_desc_with_truncated_labels() {
        let summary = summarize(&sample());
        let labels: Vec<&str> = summary.ranking.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Away", "Samsonite Inter...", "Your Site", "Monos"]);
        assert!(summary.ranking[2].is_own_site);
    }

    #[test]
    fn test_previews_and_counts() {
        let summary = summarize(&sample());
        assert_eq!(summary.category_preview, vec!["Luggage", "Backpacks", "Accessories"]);
        assert!(!summary.has_blog);
        assert!(summary.blog_theme_preview.is_empty());
        assert_eq!(summary.opportunity_count, 3);
        assert_eq!(
            summary.difficulty_counts,
            DifficultyCounts { low: 1, medium: 0, high: 2 }
        );
        assert_eq!(summary.competitor_headlines[0].headline.as_deref(), Some("Brand"));
        assert!(summary.competitor_headlines[1].headline.is_none());
    }
}
