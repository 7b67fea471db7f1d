//! Table-of-contents generation

use std::collections::HashSet;

use super::scan::{self, LineKind};

/// Token replaced by the generated table of contents
pub const TOC_PLACEHOLDER: &str = "{{TOC}}";

/// A second-level heading found in a post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub slug: String,
}

/// Collect every `## ` heading in document order
pub fn extract_headings(content: &str) -> Vec<Heading> {
    scan::lines(content)
        .filter_map(|line| match line.kind {
            LineKind::Heading(text) => Some(Heading {
                level: 2,
                text: text.to_string(),
                slug: heading_slug(text),
            }),
            _ => None,
        })
        .collect()
}

/// Anchor slug of a heading
///
/// Lowercases, drops a leading `N. ` ordinal, keeps only ASCII word
/// characters, whitespace and hyphens, then joins words with single hyphens.
pub fn heading_slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let unnumbered = scan::strip_ordinal(&lower).unwrap_or(&lower);

    let mut slug = String::with_capacity(unnumbered.len());
    for c in unnumbered.chars() {
        let c = if c.is_whitespace() {
            '-'
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            c
        } else {
            continue;
        };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug
}

/// Render the table of contents for `content`
///
/// Returns an empty string when the body has no second-level headings.
pub fn generate_table_of_contents(content: &str) -> String {
    let headings = extract_headings(content);
    if headings.is_empty() {
        return String::new();
    }

    warn_duplicate_slugs(&headings);

    let numbered = headings
        .iter()
        .all(|h| scan::strip_ordinal(&h.text).is_some());

    let mut toc = String::new();
    for (index, heading) in headings.iter().enumerate() {
        if numbered {
            let text = scan::strip_ordinal(&heading.text).unwrap_or(&heading.text);
            toc.push_str(&format!("{}. [{}](#{})\n", index + 1, text, heading.slug));
        } else {
            toc.push_str(&format!("- [{}](#{})\n", heading.text, heading.slug));
        }
    }

    toc.trim().to_string()
}

/// Replace the first `{{TOC}}` in `content` with its table of contents
pub fn insert_table_of_contents(content: &str) -> String {
    let toc = generate_table_of_contents(content);
    content.replacen(TOC_PLACEHOLDER, &toc, 1)
}

fn warn_duplicate_slugs(headings: &[Heading]) {
    let mut seen = HashSet::new();
    for heading in headings {
        if !seen.insert(heading.slug.as_str()) {
            tracing::warn!(
                "Duplicate heading anchor #{} for {:?}; links resolve to the first",
                heading.slug,
                heading.text
            );
        }
    }
}
