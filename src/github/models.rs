//! GitHub REST API payloads and the contribution record built from them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository from `/users/{user}/repos` or `/repos/{owner}/{name}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub html_url: String,
    pub fork: bool,
    pub archived: bool,
    pub is_template: bool,
}

/// An entry of `/users/{user}/events/public`
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub repo: EventRepo,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    /// `owner/name`
    pub name: String,
    /// API URL of the repository
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    pub commits: Vec<Commit>,
    pub pull_request: Option<PullRequest>,
    pub ref_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub title: String,
    pub html_url: String,
    #[serde(default)]
    pub merged: bool,
    pub state: String,
}

/// What kind of work a contribution is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContributionKind {
    #[serde(rename = "commit")]
    Commit,
    #[serde(rename = "pr")]
    PullRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrStatus {
    Open,
    Closed,
    Merged,
}

impl PrStatus {
    /// Status shown for a pull request; merged wins over the raw state
    pub fn of(pr: &PullRequest) -> Self {
        if pr.merged {
            PrStatus::Merged
        } else if pr.state == "open" {
            PrStatus::Open
        } else {
            PrStatus::Closed
        }
    }
}

impl std::fmt::Display for PrStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PrStatus::Open => "open",
            PrStatus::Closed => "closed",
            PrStatus::Merged => "merged",
        };
        f.write_str(s)
    }
}

/// The most recent meaningful piece of public work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub repo_name: String,
    pub repo_url: String,
    pub repo_description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ContributionKind,
    pub title: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr_status: Option<PrStatus>,
}
