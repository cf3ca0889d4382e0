use crate::content::models::ContentDraft;

/// Markdown document for copy / download: the title as H1, then the body.
pub fn to_markdown(draft: &ContentDraft) -> String {
    format!("# {}\n\n{}", draft.title, draft.content)
}

/// Download filename: whitespace runs become `-`, lowercased, `.md` appended.
pub fn download_filename(draft: &ContentDraft) -> String {
    let slug = draft
        .title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    // Leading/trailing whitespace still produces a dash each.
    let lead = if draft.title.starts_with(char::is_whitespace) { "-" } else { "" };
    let trail = if draft.title.ends_with(char::is_whitespace) && !slug.is_empty() {
        "-"
    } else {
        ""
    };

    format!("{lead}{slug}{trail}.md")
}
