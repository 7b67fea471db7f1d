//! Helper functions for presenting posts and activity
//!
//! Date formatting, reading-time estimates and URL building shared by
//! the content pipeline and the CLI.

mod date;
mod text;
mod url;

pub use date::*;
pub use text::*;
pub use url::*;
