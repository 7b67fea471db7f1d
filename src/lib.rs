//! folio-rs: content pipeline and GitHub activity for a personal site
//!
//! Blog posts are text files with a front-matter block. Loading a post
//! parses the block, expands the `{{TOC}}` placeholder into a table of
//! contents and rewrites footnotes. The homepage GitHub section is fed by
//! two independent, best-effort queries against the GitHub REST API.

pub mod commands;
pub mod config;
pub mod content;
pub mod github;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The site application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding post files
    pub posts_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);

        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// Load every post, in file-name order
    pub fn posts(&self) -> Result<Vec<content::Post>> {
        Ok(content::ContentLoader::new(self).load_posts()?)
    }

    /// Load every post, newest first
    pub fn posts_newest_first(&self) -> Result<Vec<content::Post>> {
        let mut posts = self.posts()?;
        content::sort_newest_first(&mut posts);
        Ok(posts)
    }

    /// Find a post by slug
    pub fn post(&self, slug: &str) -> Result<Option<content::Post>> {
        Ok(content::ContentLoader::new(self).find_post(slug)?)
    }

    /// Fetch the homepage GitHub section
    ///
    /// Never fails on API errors; they surface as the fallback panel.
    pub async fn github_widget(&self) -> Result<github::Widget> {
        let client = github::GithubClient::new(&self.config.github)?;
        let fetcher = github::ActivityFetcher::new(client, &self.config.github);
        let activity = fetcher.fetch().await;
        Ok(github::Widget::from_activity(
            activity,
            &self.config.github.profile_url(),
        ))
    }
}
