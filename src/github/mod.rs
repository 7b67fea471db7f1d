//! GitHub activity for the homepage widget

mod activity;
mod client;
mod models;
mod widget;

pub use activity::{
    contribution_from_event, is_dependency_bump, isolated, rank_repositories, ActivityFetcher,
    GithubActivity,
};
pub use client::{GithubClient, GithubError};
pub use models::{
    Commit, Contribution, ContributionKind, Event, EventPayload, EventRepo, PrStatus,
    PullRequest, Repository,
};
pub use widget::{Widget, FALLBACK_MESSAGE};
