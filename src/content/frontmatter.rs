//! Front-matter parsing

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use super::ContentError;

lazy_static! {
    /// First `---` delimited block anywhere in the document
    static ref FRONTMATTER_RE: Regex =
        Regex::new(r"---\s*([\s\S]*?)\s*---").expect("front-matter pattern is valid");
}

/// Key/value metadata block of a post, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body) where the body has the block removed and is trimmed
    pub fn parse(content: &str) -> Result<(Self, String), ContentError> {
        let captures = FRONTMATTER_RE
            .captures(content)
            .ok_or(ContentError::MissingFrontmatter)?;

        // Group 0 always exists for a successful match
        let (block_range, inner) = match (captures.get(0), captures.get(1)) {
            (Some(block), Some(inner)) => (block.range(), inner.as_str()),
            _ => return Err(ContentError::MissingFrontmatter),
        };

        let mut fields = IndexMap::new();
        for line in inner.trim().split('\n') {
            let (key, value) = split_line(line);
            if key.is_empty() {
                continue;
            }
            fields.insert(key.to_string(), strip_quotes(value).to_string());
        }

        let mut body = String::with_capacity(content.len() - block_range.len());
        body.push_str(&content[..block_range.start]);
        body.push_str(&content[block_range.end..]);

        Ok((Self { fields }, body.trim().to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume the block, yielding fields in source order
    pub fn into_fields(self) -> IndexMap<String, String> {
        self.fields
    }
}

/// Split a `key: value` line on the first `": "`; the value keeps any further separators
fn split_line(line: &str) -> (&str, &str) {
    match line.split_once(": ") {
        Some((key, value)) => (key.trim(), value.trim()),
        None => (line.trim(), ""),
    }
}

/// Remove one layer of surrounding quotes
fn strip_quotes(value: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if is_quote(first) && is_quote(last) => {
            &value[first.len_utf8()..value.len() - last.len_utf8()]
        }
        _ => value,
    }
}
