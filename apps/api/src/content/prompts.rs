// All LLM prompt constants for the Content module.

/// GEO article prompt template.
/// Replace: {topic}, {keyword}, {content_type}
pub const DRAFT_PROMPT_TEMPLATE: &str = r#"Act as a world-class SEO content writer and expert in GEO (Generative Engine Optimization).

Target Topic: "{topic}"
Target Keyword: "{keyword}"
Content Type: {content_type}

Goal: Create content that ranks in AI answer surfaces (AI Overviews, Gemini, ChatGPT Search) as well as traditional search engines.

GEO & SEO Strategy:
1. Direct Answer Optimization: Open with a clear, concise definition or answer to the core query (approx 40-60 words) immediately after the H1.
2. Structured Knowledge: Use bullet points, numbered lists, and comparison tables.
3. Authority & Citations: Include expert insights or statistics that build trust.
4. Comprehensive Coverage: Cover related entities and "People Also Ask" questions as H2s or H3s.
5. Fluency & Simplicity: Use simple sentence structures. Avoid fluff.
6. Meta Data Optimization:
   - Title Tag: a high-CTR title under 60 characters that includes the primary keyword "{keyword}".
   - Meta Description: a persuasive summary under 160 characters that includes the primary keyword "{keyword}" and a clear value proposition.

Format Requirements:
- Use proper Markdown (H1, H2, H3, bold, lists, tables).
- Length: 800-1200 words.

Output strictly in this JSON format:
{
  "title": "GEO Optimized Title",
  "metaDescription": "Click-worthy meta description under 160 chars",
  "targetKeywords": ["{keyword}", "semantic keyword 1", "semantic keyword 2"],
  "content": "Full markdown content here..."
}"#;
