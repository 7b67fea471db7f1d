//! Homepage activity: top repositories and the most recent contribution
//!
//! Each query is its own failure domain. A failed query collapses to its
//! empty value where it is awaited and never affects the other query.

use chrono::{DateTime, Months, Utc};
use serde::Serialize;
use std::future::Future;

use super::client::{GithubClient, GithubError};
use super::models::{Contribution, ContributionKind, Event, PrStatus, Repository};
use crate::config::GithubConfig;

/// Await a query, turning any failure into the empty value
pub async fn isolated<T, F>(query: &'static str, fut: F) -> T
where
    T: Default,
    F: Future<Output = Result<T, GithubError>>,
{
    match fut.await {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Error fetching {}: {}", query, e);
            T::default()
        }
    }
}

/// Drop forks and keep the `limit` most starred repositories
///
/// Ties keep the API order.
pub fn rank_repositories(repos: Vec<Repository>, limit: usize) -> Vec<Repository> {
    let mut own: Vec<Repository> = repos.into_iter().filter(|r| !r.fork).collect();
    own.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    own.truncate(limit);
    own
}

/// Whether a commit message looks like an automated dependency update
pub fn is_dependency_bump(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("dependabot")
        || message.contains("renovate")
        || (message.contains("bump") && message.contains("version"))
}

/// Browser URL of a repository from its API URL
fn browser_url(api_url: &str) -> String {
    api_url.replace("api.github.com/repos", "github.com")
}

/// Turn an event into a contribution, without the repository description
///
/// Returns `None` for events that never count: branch creation, deletion,
/// pushes without commits or made by bots, and anything that is not a
/// push or a pull request.
pub fn contribution_from_event(event: &Event) -> Option<Contribution> {
    let repo_url = browser_url(&event.repo.url);

    match event.kind.as_str() {
        "PushEvent" => {
            let commit = event.payload.commits.last()?;
            let title = commit.message.split('\n').next().unwrap_or_default();
            if is_dependency_bump(title) {
                tracing::debug!("Skipping automated commit {:?}", title);
                return None;
            }
            Some(Contribution {
                repo_name: event.repo.name.clone(),
                url: format!("{}/commit/{}", repo_url, commit.sha),
                repo_url,
                repo_description: None,
                kind: ContributionKind::Commit,
                title: title.to_string(),
                timestamp: event.created_at,
                pr_status: None,
            })
        }
        "PullRequestEvent" => {
            let pr = event.payload.pull_request.as_ref()?;
            Some(Contribution {
                repo_name: event.repo.name.clone(),
                repo_url,
                repo_description: None,
                kind: ContributionKind::PullRequest,
                title: pr.title.clone(),
                url: pr.html_url.clone(),
                timestamp: event.created_at,
                pr_status: Some(PrStatus::of(pr)),
            })
        }
        _ => None,
    }
}

/// Queries behind the homepage GitHub section
pub struct ActivityFetcher {
    client: GithubClient,
    top_repos: usize,
    lookback_months: u32,
}

impl ActivityFetcher {
    pub fn new(client: GithubClient, config: &GithubConfig) -> Self {
        Self {
            client,
            top_repos: config.top_repos,
            lookback_months: config.lookback_months,
        }
    }

    /// The account's most starred non-fork repositories
    pub async fn top_repositories(&self) -> Result<Vec<Repository>, GithubError> {
        let repos = self.client.list_repositories().await?;
        Ok(rank_repositories(repos, self.top_repos))
    }

    /// The newest push or pull request within the lookback window
    ///
    /// Only the first page of events is examined.
    pub async fn most_recent_contribution(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<Contribution>, GithubError> {
        let events = self.client.list_public_events().await?;
        let horizon = now
            .checked_sub_months(Months::new(self.lookback_months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        for value in events {
            let event: Event = match serde_json::from_value(value) {
                Ok(event) => event,
                Err(e) => {
                    tracing::debug!("Skipping undecodable event: {}", e);
                    continue;
                }
            };

            if event.created_at < horizon {
                continue;
            }
            if event.kind == "CreateEvent" && event.payload.ref_type.as_deref() == Some("branch") {
                continue;
            }
            if event.kind == "DeleteEvent" {
                continue;
            }

            let Some(mut contribution) = contribution_from_event(&event) else {
                continue;
            };

            // A missing description never discards the contribution
            contribution.repo_description = match self.client.repository(&event.repo.name).await {
                Ok(repo) => repo.description,
                Err(e) => {
                    tracing::error!("Error fetching repo details: {}", e);
                    None
                }
            };

            return Ok(Some(contribution));
        }

        Ok(None)
    }

    /// Run both queries concurrently, each in its own failure domain
    pub async fn fetch(&self) -> GithubActivity {
        let (top_repositories, recent_contribution) = tokio::join!(
            isolated("repositories", self.top_repositories()),
            isolated("recent contribution", self.most_recent_contribution(Utc::now())),
        );

        GithubActivity {
            top_repositories,
            recent_contribution,
        }
    }
}

/// Data for the homepage GitHub section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubActivity {
    pub top_repositories: Vec<Repository>,
    pub recent_contribution: Option<Contribution>,
}

impl GithubActivity {
    /// Nothing to show; the widget falls back to a static panel
    pub fn is_empty(&self) -> bool {
        self.top_repositories.is_empty() && self.recent_contribution.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u64, fork: bool) -> Repository {
        Repository {
            name: name.to_string(),
            stargazers_count: stars,
            fork,
            ..Default::default()
        }
    }

    fn event(json: &str) -> Event {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_rank_repositories_excludes_forks() {
        let repos = vec![repo("a", 5, false), repo("b", 50, true), repo("c", 10, false)];
        let ranked: Vec<_> = rank_repositories(repos, 3)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(ranked, vec!["c", "a"]);
    }

    #[test]
    fn test_rank_repositories_limit_and_ties() {
        let repos = vec![
            repo("x", 1, false),
            repo("first-tie", 7, false),
            repo("second-tie", 7, false),
            repo("top", 99, false),
        ];
        let ranked: Vec<_> = rank_repositories(repos, 3)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(ranked, vec!["top", "first-tie", "second-tie"]);
    }

    #[test]
    fn test_is_dependency_bump() {
        assert!(is_dependency_bump("Bump lodash version to 2.0"));
        assert!(is_dependency_bump("chore(deps): update by Renovate"));
        assert!(is_dependency_bump("Merge pull request #3 from dependabot/npm"));
        assert!(!is_dependency_bump("Bump the counter"));
        assert!(!is_dependency_bump("Add version flag"));
        assert!(!is_dependency_bump("Fix crash on launch"));
    }

    #[test]
    fn test_push_event_uses_last_commit_first_line() {
        let e = event(
            r#"{"type": "PushEvent", "created_at": "2024-05-01T10:00:00Z",
                "repo": {"name": "me/app", "url": "https://api.github.com/repos/me/app"},
                "payload": {"commits": [
                    {"sha": "111", "message": "Older"},
                    {"sha": "222", "message": "Newest change\n\nLong body"}
                ]}}"#,
        );
        let c = contribution_from_event(&e).unwrap();
        assert_eq!(c.kind, ContributionKind::Commit);
        assert_eq!(c.title, "Newest change");
        assert_eq!(c.repo_url, "https://github.com/me/app");
        assert_eq!(c.url, "https://github.com/me/app/commit/222");
        assert_eq!(c.pr_status, None);
    }

    #[test]
    fn test_bump_commit_is_skipped() {
        let e = event(
            r#"{"type": "PushEvent", "created_at": "2024-05-01T10:00:00Z",
                "repo": {"name": "me/app", "url": "https://api.github.com/repos/me/app"},
                "payload": {"commits": [{"sha": "1", "message": "Bump lodash version to 2.0"}]}}"#,
        );
        assert!(contribution_from_event(&e).is_none());
    }

    #[test]
    fn test_push_without_commits_is_skipped() {
        let e = event(
            r#"{"type": "PushEvent", "created_at": "2024-05-01T10:00:00Z",
                "repo": {"name": "me/app", "url": "https://api.github.com/repos/me/app"},
                "payload": {"commits": []}}"#,
        );
        assert!(contribution_from_event(&e).is_none());
    }

    #[test]
    fn test_pull_request_event() {
        let e = event(
            r#"{"type": "PullRequestEvent", "created_at": "2024-05-01T10:00:00Z",
                "repo": {"name": "org/lib", "url": "https://api.github.com/repos/org/lib"},
                "payload": {"pull_request": {"title": "Add API", "html_url": "https://github.com/org/lib/pull/9",
                                             "merged": false, "state": "open"}}}"#,
        );
        let c = contribution_from_event(&e).unwrap();
        assert_eq!(c.kind, ContributionKind::PullRequest);
        assert_eq!(c.url, "https://github.com/org/lib/pull/9");
        assert_eq!(c.pr_status, Some(PrStatus::Open));
    }

    #[test]
    fn test_other_events_do_not_count() {
        let e = event(
            r#"{"type": "IssuesEvent", "created_at": "2024-05-01T10:00:00Z",
                "repo": {"name": "org/lib", "url": "https://api.github.com/repos/org/lib"},
                "payload": {}}"#,
        );
        assert!(contribution_from_event(&e).is_none());
    }

    #[tokio::test]
    async fn test_isolated_collapses_errors() {
        let failed: Vec<Repository> = isolated("repositories", async {
            Err(GithubError::Status {
                endpoint: "/users/me/repos".to_string(),
                status: reqwest::StatusCode::FORBIDDEN,
            })
        })
        .await;
        assert!(failed.is_empty());

        let ok: Option<u32> = isolated("value", async { Ok(Some(3)) }).await;
        assert_eq!(ok, Some(3));
    }

    #[test]
    fn test_activity_is_empty() {
        assert!(GithubActivity::default().is_empty());
        let activity = GithubActivity {
            top_repositories: vec![repo("a", 1, false)],
            recent_contribution: None,
        };
        assert!(!activity.is_empty());
    }
}
