//! Configuration module

mod site;

pub use site::GithubConfig;
pub use site::HighlightConfig;
pub use site::SiteConfig;
