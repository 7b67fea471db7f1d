//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    /// Repository browsed by the "view source" link of a post
    pub source_repo: String,

    // Content
    pub posts_dir: String,
    pub post_extension: String,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Homepage widget
    #[serde(default)]
    pub github: GithubConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Indragie Karunaratne".to_string(),
            description: String::new(),
            author: "Indragie Karunaratne".to_string(),

            url: "https://www.indragie.com".to_string(),
            source_repo: "https://github.com/indragiek/indragie.com".to_string(),

            posts_dir: "app/blog/posts".to_string(),
            post_extension: "mdx".to_string(),
            highlight: HighlightConfig::default(),

            github: GithubConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Canonical URL of a post
    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{}", self.url.trim_end_matches('/'), slug)
    }

    /// Link to the source file of a post in the site repository
    pub fn post_source_url(&self, slug: &str) -> String {
        format!(
            "{}/blob/main/{}/{}.{}",
            self.source_repo.trim_end_matches('/'),
            self.posts_dir.trim_matches('/'),
            slug,
            self.post_extension
        )
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// GitHub activity widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub username: String,
    pub api_base: String,
    /// Name of the environment variable holding an optional bearer token
    pub token_env: String,
    pub per_page: u32,
    pub top_repos: usize,
    pub lookback_months: u32,
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            username: "indragiek".to_string(),
            api_base: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            per_page: 100,
            top_repos: 3,
            lookback_months: 6,
            timeout_secs: 10,
        }
    }
}

impl GithubConfig {
    /// Read the bearer token from the configured environment variable
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
    }

    /// Profile page shown by the fallback panel
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "app/blog/posts");
        assert_eq!(config.post_extension, "mdx");
        assert_eq!(config.github.top_repos, 3);
        assert_eq!(config.github.lookback_months, 6);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
posts_dir: content/posts
github:
  username: octocat
  per_page: 30
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.github.username, "octocat");
        assert_eq!(config.github.per_page, 30);
        // Unset nested fields keep their defaults
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert_eq!(config.post_extension, "mdx");
    }

    #[test]
    fn test_post_urls() {
        let mut config = SiteConfig::default();
        config.url = "https://example.com/".to_string();
        assert_eq!(config.post_url("hello"), "https://example.com/blog/hello");
        assert_eq!(
            config.post_source_url("hello"),
            "https://github.com/indragiek/indragie.com/blob/main/app/blog/posts/hello.mdx"
        );
    }

    #[test]
    fn test_profile_url() {
        let config = GithubConfig::default();
        assert_eq!(config.profile_url(), "https://github.com/indragiek");
    }
}
