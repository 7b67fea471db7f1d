//! Footnote rewriting
//!
//! Definitions (`[^1]: text` at the start of a line) are pulled out of
//! the body, references (`[^1]`) become superscript anchors, and a
//! "Notes" section listing the definitions is appended.

use indexmap::IndexMap;

use super::scan::{self, LineKind};

/// A footnote definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    pub label: String,
    pub body: String,
}

/// Collect definitions in first-seen order; a repeated label keeps its
/// position but takes the later text
pub fn collect_footnotes(content: &str) -> Vec<Footnote> {
    let mut map: IndexMap<&str, &str> = IndexMap::new();
    for line in scan::lines(content) {
        if let LineKind::Definition { label, text } = line.kind {
            map.insert(label, text);
        }
    }
    map.into_iter()
        .map(|(label, body)| Footnote {
            label: label.to_string(),
            body: body.to_string(),
        })
        .collect()
}

/// Rewrite footnotes in `content`
///
/// Content without any definition is returned unchanged, references included.
pub fn process_footnotes(content: &str) -> String {
    let footnotes = collect_footnotes(content);
    if footnotes.is_empty() {
        return content.to_string();
    }

    let body = scan::lines(content)
        .filter(|line| !matches!(line.kind, LineKind::Definition { .. }))
        .map(|line| line.raw)
        .collect::<Vec<_>>()
        .join("\n");

    let linked = link_references(&body);
    format!("{}\n\n{}", linked.trim_end(), render_notes(&footnotes))
}

/// Replace every `[^N]` marker with a superscript anchor
///
/// Labels without a definition still get an anchor; it simply has no target.
fn link_references(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for reference in scan::references(text) {
        out.push_str(&text[last..reference.start]);
        out.push_str(&reference_anchor(reference.label));
        last = reference.end;
    }
    out.push_str(&text[last..]);
    out
}

fn reference_anchor(label: &str) -> String {
    format!(
        r##"<sup id="fnref-{label}"><a href="#fn-{label}">{label}</a></sup>"##,
        label = label
    )
}

/// The appended notes section
///
/// Entry bodies sit between blank lines so Markdown inside them is still rendered.
fn render_notes(footnotes: &[Footnote]) -> String {
    let mut html = String::from(
        "<section class=\"footnotes\" id=\"footnotes\">\n<h2>Notes</h2>\n<ol>\n",
    );
    for note in footnotes {
        html.push_str(&format!(
            "<li id=\"fn-{label}\" value=\"{label}\">\n\n{body} [↩](#fnref-{label})\n\n</li>\n",
            label = note.label,
            body = note.body
        ));
    }
    html.push_str("</ol>\n</section>");
    html
}
