// All LLM prompt constants for the Analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Sampling temperature for analysis calls; kept low for repeatable output.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// Website analysis prompt template.
/// Replace: {url}, {json_only_instruction}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"I need a comprehensive SEO & Content Strategy analysis for the website: {url}.

Step 1: Analyze the target website ({url}).
- Identify its main product categories.
- CRITICAL: Check for a /blog, /news, or /insights section. Identify the main topics, themes, or specific articles it currently has. If there is no blog, return an empty "blogThemes" array (no blog detected). Never omit the field.

Step 2: Find exactly 3 organic competitors.
- For each competitor, analyze their blog & content strategy. Which specific topics are they writing about that drive traffic?
- Identify their top keywords and the reasons they rank well.
- Estimate a visibility score from 0 to 100.

Step 3: Perform a content gap analysis focused on blogs.
- Compare competitor blog themes against the content of {url}.
- Identify specific blog topics that competitors have written about but {url} is missing.
- CRITICAL: Provide at least 20 distinct blog post opportunities that would help the site rank better.
- Identify missing product categories.
- Tag every opportunity with a difficulty ("Low", "Medium" or "High") and a target keyword.

{json_only_instruction}
{
  "url": "{url}",
  "websiteScore": 50,
  "categories": ["Product Category 1", "Product Category 2"],
  "blogThemes": ["Current Blog Theme 1", "Current Blog Theme 2"],
  "competitors": [
    {
      "name": "Competitor Name",
      "url": "competitor.com",
      "topKeywords": ["keyword1", "keyword2"],
      "strengths": ["Reason they rank well"],
      "visibilityScore": 85,
      "blogThemes": ["Competitor Blog Theme 1", "Competitor Blog Theme 2"]
    }
  ],
  "opportunities": [
    {
      "id": "unique_id_1",
      "title": "Specific Blog Title to Write",
      "type": "blog",
      "difficulty": "Medium",
      "reason": "Competitor X covers this topic extensively, you have 0 pages on it.",
      "targetKeyword": "main keyword"
    }
  ]
}

Field rules:
- "websiteScore" and "visibilityScore" are integers from 0 to 100.
- "type" is one of "blog", "product_category", "landing_page".
- Every "id" is unique."#;
