use serde::{Deserialize, Serialize};

/// Kind of content a gap calls for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityType {
    #[default]
    Blog,
    ProductCategory,
    LandingPage,
}

impl OpportunityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::Blog => "blog",
            OpportunityType::ProductCategory => "product_category",
            OpportunityType::LandingPage => "landing_page",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "blog" => Some(OpportunityType::Blog),
            "product_category" => Some(OpportunityType::ProductCategory),
            "landing_page" => Some(OpportunityType::LandingPage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    #[default]
    Medium,
    High,
}

impl Difficulty {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Difficulty::Low),
            "medium" => Some(Difficulty::Medium),
            "high" => Some(Difficulty::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    pub url: String,
    pub top_keywords: Vec<String>,
    /// First element is the headline strength.
    pub strengths: Vec<String>,
    pub visibility_score: u8, // 0 – 100
    pub blog_themes: Vec<String>,
}

impl Competitor {
    pub fn headline_strength(&self) -> Option<&str> {
        self.strengths.first().map(String::as_str)
    }
}

/// A content gap: covered by competitors, missing from the target site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Unique within one `AnalysisResult`.
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub opportunity_type: OpportunityType,
    pub difficulty: Difficulty,
    pub reason: String,
    pub target_keyword: String,
}

/// Normalized output of one website analysis. Every container is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub website_score: u8, // 0 – 100
    pub categories: Vec<String>,
    /// Empty means no blog was detected.
    pub blog_themes: Vec<String>,
    pub competitors: Vec<Competitor>,
    pub opportunities: Vec<Opportunity>,
}

impl AnalysisResult {
    pub fn opportunity(&self, id: &str) -> Option<&Opportunity> {
        self.opportunities.iter().find(|o| o.id == id)
    }
}
