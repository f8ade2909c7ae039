//! Prompt construction for search-grounded outline generation.

use shelfmark_core::MetadataHint;

/// What the prompt asks about: the catalog record when one was found,
/// otherwise the caller's query as given.
///
/// # Examples
///
/// ```
/// use shelfmark_core::MetadataHint;
/// use shelfmark_toc::target_info;
///
/// let hint = MetadataHint::builder()
///     .title("プログラミングRust")
///     .authors(vec!["Jim Blandy".to_string(), "Jason Orendorff".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     target_info(&hint, "ISBN: 9784873119786"),
///     "Book Title: プログラミングRust, Authors: Jim Blandy, Jason Orendorff"
/// );
/// assert_eq!(target_info(&MetadataHint::default(), "Rust入門"), "Rust入門");
/// ```
pub fn target_info(hint: &MetadataHint, query: &str) -> String {
    match hint.title_if_present() {
        Some(title) => format!(
            "Book Title: {}, Authors: {}",
            title,
            hint.authors().join(", ")
        ),
        None => query.to_string(),
    }
}

/// Full prompt for one outline generation call.
pub fn build_prompt(hint: &MetadataHint, query: &str) -> String {
    format!(
        r#"You are an expert at compiling book tables of contents.
Use the Google Search tool to find the accurate, detailed table of contents of the book below.

Book:
"{target}"

Search tips:
- Queries like "<title> 目次" or "<title> table of contents" usually find detailed listings.
- Prefer the publisher's official page and retail product pages.

Requirements:
1. Accuracy first. Include only chapters, sections and subsections that the search results state explicitly.
2. Never invent headings at any level. If deeper levels cannot be found, output only the levels you found (for example level 1 only).
3. Do not abbreviate. Write every heading you found in full, without "...".
4. Levels: 1 = chapter or part, 2 = section, 3 = subsection.
5. Output only JSON in the format below, with no explanation, preamble or markdown code fences.

{{
    "title": "Official book title",
    "toc": [
        {{ "title": "Chapter 1: ...", "level": 1 }},
        {{ "title": "1.1 ...", "level": 2 }}
    ]
}}
"#,
        target = target_info(hint, query)
    )
}
