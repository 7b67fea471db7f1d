//! Thin GitHub REST client

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use super::models::Repository;
use crate::config::GithubConfig;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("GitHub request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub API error {status} for {endpoint}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to build GitHub client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Client for the handful of endpoints the activity widget needs
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    username: String,
    per_page: u32,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client from configuration, reading the token from the environment
    pub fn new(config: &GithubConfig) -> Result<Self, GithubError> {
        Self::with_token(config, config.token())
    }

    /// Create a client with an explicit (optional) bearer token
    pub fn with_token(config: &GithubConfig, token: Option<String>) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("folio-rs/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(GithubError::Client)?;

        if token.is_none() {
            tracing::debug!("No GitHub token configured, using unauthenticated requests");
        }

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            per_page: config.per_page,
            token,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Repositories owned by the account
    pub async fn list_repositories(&self) -> Result<Vec<Repository>, GithubError> {
        self.get(&format!(
            "/users/{}/repos?type=owner&sort=updated&per_page={}",
            self.username, self.per_page
        ))
        .await
    }

    /// Most recent public events, newest first
    ///
    /// Entries are left undecoded; callers convert only the events they
    /// walk so one odd payload cannot fail the whole page.
    pub async fn list_public_events(&self) -> Result<Vec<serde_json::Value>, GithubError> {
        self.get(&format!(
            "/users/{}/events/public?per_page={}",
            self.username, self.per_page
        ))
        .await
    }

    /// Details of one repository, `full_name` being `owner/name`
    pub async fn repository(&self, full_name: &str) -> Result<Repository, GithubError> {
        self.get(&format!("/repos/{}", full_name)).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, GithubError> {
        let url = format!("{}{}", self.api_base, endpoint);
        tracing::debug!("GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let http_error = |source| GithubError::Http {
            endpoint: endpoint.to_string(),
            source,
        };

        let response = request.send().await.map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        response.json::<T>().await.map_err(http_error)
    }
}
