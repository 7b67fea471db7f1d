//! What the homepage GitHub section shows

use serde::Serialize;

use super::activity::GithubActivity;
use crate::helpers;

/// Message of the static panel shown when no activity could be loaded
pub const FALLBACK_MESSAGE: &str = "Unable to load GitHub activity at the moment.";

/// The GitHub section: live activity, or the static fallback panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Widget {
    Activity(GithubActivity),
    Fallback { message: String, profile_url: String },
}

impl Widget {
    /// Pick the view for fetched activity
    pub fn from_activity(activity: GithubActivity, profile_url: &str) -> Self {
        if activity.is_empty() {
            Widget::Fallback {
                message: FALLBACK_MESSAGE.to_string(),
                profile_url: profile_url.to_string(),
            }
        } else {
            Widget::Activity(activity)
        }
    }

    /// Plain-text rendering for the terminal
    pub fn to_text(&self) -> String {
        let activity = match self {
            Widget::Fallback {
                message,
                profile_url,
            } => return format!("{}\nView my GitHub profile → {}", message, profile_url),
            Widget::Activity(activity) => activity,
        };

        let mut out = String::new();

        if let Some(c) = &activity.recent_contribution {
            out.push_str("Most recent contribution\n");
            out.push_str(&format!(
                "  {} ({})\n",
                c.repo_name,
                helpers::relative_time(&c.timestamp)
            ));
            if let Some(description) = &c.repo_description {
                out.push_str(&format!("  {}\n", description));
            }
            match c.pr_status {
                Some(status) => out.push_str(&format!("  {} [{}]\n", c.title, status)),
                None => out.push_str(&format!("  {}\n", c.title)),
            }
            out.push_str(&format!("  {}\n", c.url));
        }

        if !activity.top_repositories.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str("Popular repositories\n");
            for repo in &activity.top_repositories {
                let mut badges = String::new();
                if repo.archived {
                    badges.push_str(" [archived]");
                }
                if repo.is_template {
                    badges.push_str(" [template]");
                }
                out.push_str(&format!(
                    "  {} ★{}{}\n",
                    repo.name, repo.stargazers_count, badges
                ));
                if let Some(description) = &repo.description {
                    out.push_str(&format!("    {}\n", description));
                }
            }
        }

        out.trim_end().to_string()
    }
}
