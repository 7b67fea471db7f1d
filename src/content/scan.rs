//! Single-pass scanners for the body conventions of a post
//!
//! Posts use three line-level conventions on top of Markdown:
//! second-level headings (`## Title`), footnote definitions anchored at
//! the start of a line (`[^1]: text`) and inline footnote references
//! (`[^1]`). The scanners here walk the text once, front to back, and
//! yield every match in document order.

/// Classification of one source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `## text`; holds the trimmed display text
    Heading(&'a str),
    /// `[^label]: text`
    Definition { label: &'a str, text: &'a str },
    /// Anything else
    Text,
}

/// A source line together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// The line without its terminating `\n`
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

/// Split `content` on `\n` and classify each line
pub fn lines(content: &str) -> impl Iterator<Item = ScannedLine<'_>> {
    content.split('\n').map(|raw| ScannedLine {
        raw,
        kind: classify(raw),
    })
}

fn classify(line: &str) -> LineKind<'_> {
    if let Some(text) = heading_text(line) {
        return LineKind::Heading(text);
    }
    if let Some((label, text)) = definition(line) {
        return LineKind::Definition { label, text };
    }
    LineKind::Text
}

/// Exactly two hashes, at least one whitespace character, then the text
fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// `[^digits]:` at column zero
fn definition(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("[^")?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let text = rest[digits..].strip_prefix("]:")?;
    Some((&rest[..digits], text.trim()))
}

/// Strip a leading `N. ` ordinal, returning the remainder
pub fn strip_ordinal(text: &str) -> Option<&str> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = text[digits..].strip_prefix('.')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}

/// An inline `[^label]` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Byte offset of `[`
    pub start: usize,
    /// Byte offset just past `]`
    pub end: usize,
    pub label: &'a str,
}

/// Iterator over footnote references in a piece of text
pub struct References<'a> {
    text: &'a str,
    pos: usize,
}

/// Scan `text` for `[^digits]` markers
pub fn references(text: &str) -> References<'_> {
    References { text, pos: 0 }
}

impl<'a> Iterator for References<'a> {
    type Item = Reference<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(offset) = self.text[self.pos..].find("[^") {
            let start = self.pos + offset;
            let label_start = start + 2;
            let digits = self.text[label_start..]
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();
            let label_end = label_start + digits;

            if digits > 0 && self.text[label_end..].starts_with(']') {
                self.pos = label_end + 1;
                return Some(Reference {
                    start,
                    end: label_end + 1,
                    label: &self.text[label_start..label_end],
                });
            }

            // Resume after the `[^` so overlapping candidates are still seen
            self.pos = label_start;
        }
        self.pos = self.text.len();
        None
    }
}
