//! CLI commands

pub mod github;
pub mod list;
pub mod meta;
pub mod search;
pub mod show;
