//! Content loader - loads posts from the posts directory

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{footnotes, toc, ContentError, FrontMatter, Metadata, Post};
use crate::Folio;

/// Expand the table of contents, then rewrite footnotes
///
/// The order is fixed: footnote rewriting must see the body after the
/// `{{TOC}}` placeholder has been substituted.
pub fn process_content(body: &str) -> String {
    let with_toc = toc::insert_table_of_contents(body);
    footnotes::process_footnotes(&with_toc)
}

/// Parse one post from its raw text
pub fn parse_post(slug: &str, raw: &str) -> Result<Post, ContentError> {
    let (fm, body) = FrontMatter::parse(raw)?;
    let metadata = Metadata::from(fm);
    Ok(Post::new(slug, metadata, process_content(&body)))
}

/// Loads posts from a directory of front-matter files
pub struct ContentLoader {
    posts_dir: PathBuf,
    extension: String,
}

impl ContentLoader {
    /// Create a loader over the site's configured posts directory
    pub fn new(folio: &Folio) -> Self {
        Self::with_dir(&folio.posts_dir, &folio.config.post_extension)
    }

    /// Create a loader over an arbitrary directory
    pub fn with_dir<P: AsRef<Path>>(posts_dir: P, extension: &str) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Load every post, ordered by file name
    ///
    /// A file without front-matter fails the whole load.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        if !self.posts_dir.exists() {
            tracing::debug!("Posts directory {:?} does not exist", self.posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ContentError::Io {
                path: self.posts_dir.clone(),
                source: e.into(),
            })?;
            let path = entry.path();
            if path.is_file() && self.has_post_extension(path) {
                posts.push(self.load_post(path)?);
            }
        }

        warn_duplicate_slugs(&posts);
        tracing::info!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);

        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // Slug comes from the filename, not the title
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");

        let post = parse_post(slug, &raw).map_err(|e| e.in_file(path))?;
        tracing::debug!("Loaded post {} ({:?})", post.slug, post.metadata.title);

        Ok(post)
    }

    /// Find a post by slug
    pub fn find_post(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        Ok(self.load_posts()?.into_iter().find(|post| post.slug == slug))
    }

    fn has_post_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.extension)
            .unwrap_or(false)
    }
}

/// Index posts by slug; a later post shadows an earlier one with the same slug
pub fn index_by_slug(posts: &[Post]) -> IndexMap<&str, &Post> {
    let mut index = IndexMap::with_capacity(posts.len());
    for post in posts {
        index.insert(post.slug.as_str(), post);
    }
    index
}

fn warn_duplicate_slugs(posts: &[Post]) {
    let index = index_by_slug(posts);
    if index.len() == posts.len() {
        return;
    }
    for post in posts {
        if let Some(winner) = index.get(post.slug.as_str()) {
            if !std::ptr::eq(*winner, post) {
                tracing::warn!(
                    "Duplicate post slug {:?}; {:?} is shadowed when looked up by slug",
                    post.slug,
                    post.metadata.title
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const POST: &str = "---\ntitle: 'First'\npublishedAt: 2024-01-15\nsummary: The first post\n---\n\n{{TOC}}\n\n## 1. Hello\n\nText[^1].\n\n## 2. Bye\n\n[^1]: A note.\n";

    #[test]
    fn test_process_content_order() {
        let out = process_content("{{TOC}}\n\n## Intro\n\nSee[^1].\n\n[^1]: Ref.");
        assert!(out.starts_with("- [Intro](#intro)\n\n## Intro"));
        assert!(out.contains(r##"<sup id="fnref-1"><a href="#fn-1">1</a></sup>"##));
        assert!(out.ends_with("</section>"));
    }

    #[test]
    fn test_parse_post() {
        let post = parse_post("first", POST).unwrap();
        assert_eq!(post.slug, "first");
        assert_eq!(post.metadata.title, "First");
        assert_eq!(post.metadata.summary, "The first post");
        assert!(post.content.starts_with("1. [Hello](#hello)\n2. [Bye](#bye)"));
        assert!(post.content.contains("<h2>Notes</h2>"));
        assert!(!post.content.contains("{{TOC}}"));
    }

    #[test]
    fn test_load_posts_filters_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b-post.mdx"), POST).unwrap();
        fs::write(dir.path().join("a-post.mdx"), POST).unwrap();
        fs::write(dir.path().join("notes.md"), "no front-matter here").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.mdx"), POST).unwrap();

        let loader = ContentLoader::with_dir(dir.path(), "mdx");
        let posts = loader.load_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a-post", "b-post"]);
    }

    #[test]
    fn test_missing_frontmatter_fails_load() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("good.mdx"), POST).unwrap();
        fs::write(dir.path().join("bad.mdx"), "# No metadata\n").unwrap();

        let loader = ContentLoader::with_dir(dir.path(), ".mdx");
        let err = loader.load_posts().unwrap_err();
        assert!(err.is_missing_frontmatter());
        assert!(err.to_string().contains("bad.mdx"));
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let loader = ContentLoader::with_dir(dir.path().join("nope"), "mdx");
        assert!(loader.load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_find_post() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hello.mdx"), POST).unwrap();
        let loader = ContentLoader::with_dir(dir.path(), "mdx");
        assert!(loader.find_post("hello").unwrap().is_some());
        assert!(loader.find_post("missing").unwrap().is_none());
    }

    #[test]
    fn test_index_by_slug_last_wins() {
        let first = parse_post("same", POST).unwrap();
        let mut second = first.clone();
        second.metadata.title = "Second".to_string();
        let posts = vec![first, second];

        let index = index_by_slug(&posts);
        assert_eq!(index.len(), 1);
        assert_eq!(index["same"].metadata.title, "Second");
    }
}
