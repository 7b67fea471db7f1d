//! Post model

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::FrontMatter;
use crate::config::SiteConfig;
use crate::helpers;

/// Typed view of a post's front-matter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    /// ISO-like date string, e.g. `2024-01-15` or `2024-01-15T09:30:00`
    pub published_at: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Any other front-matter keys, in source order
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
}

impl From<FrontMatter> for Metadata {
    fn from(fm: FrontMatter) -> Self {
        let mut fields = fm.into_fields();
        let title = fields.shift_remove("title").unwrap_or_default();
        let published_at = fields.shift_remove("publishedAt").unwrap_or_default();
        let summary = fields.shift_remove("summary").unwrap_or_default();
        let image = fields
            .shift_remove("image")
            .filter(|image| !image.is_empty());

        Self {
            title,
            published_at,
            summary,
            image,
            extra: fields,
        }
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// File stem of the source file
    pub slug: String,

    pub metadata: Metadata,

    /// Body with the table of contents and footnotes expanded
    pub content: String,
}

impl Post {
    pub fn new(slug: impl Into<String>, metadata: Metadata, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            metadata,
            content: content.into(),
        }
    }

    /// Publication date, if the front-matter date parses
    pub fn published_date(&self) -> Option<NaiveDateTime> {
        helpers::parse_published_at(&self.metadata.published_at)
    }

    /// Estimated reading time, e.g. `4 min read`
    pub fn reading_time(&self) -> String {
        helpers::reading_time(&self.content)
    }

    /// Case-insensitive match against title, summary and content
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.metadata.title.to_lowercase().contains(&term)
            || self.metadata.summary.to_lowercase().contains(&term)
            || self.content.to_lowercase().contains(&term)
    }

    /// Social preview image: the front-matter image or a generated one
    pub fn og_image(&self, config: &SiteConfig) -> String {
        match &self.metadata.image {
            Some(image) => image.clone(),
            None => helpers::og_image_url(
                config,
                &self.metadata.title,
                &self.metadata.published_at,
            ),
        }
    }

    /// schema.org `BlogPosting` document for the post page
    pub fn structured_data(&self, config: &SiteConfig) -> serde_json::Value {
        let image = match &self.metadata.image {
            Some(image) => format!("{}{}", config.url.trim_end_matches('/'), image),
            None => self.og_image(config),
        };

        serde_json::json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": self.metadata.title,
            "datePublished": self.metadata.published_at,
            "dateModified": self.metadata.published_at,
            "description": self.metadata.summary,
            "image": image,
            "url": config.post_url(&self.slug),
            "author": {
                "@type": "Person",
                "name": config.author,
            },
        })
    }
}

/// Sort posts by publication date, newest first
///
/// Posts whose date does not parse sort after every dated post.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.published_date().cmp(&a.published_date()));
}

/// Posts matching a search term, preserving order
pub fn search<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.matches(term)).collect()
}
