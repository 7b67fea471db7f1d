//! Errors raised while loading post content

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("No frontmatter found")]
    MissingFrontmatter,

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid post {path:?}: {source}")]
    InvalidPost {
        path: PathBuf,
        #[source]
        source: Box<ContentError>,
    },
}

impl ContentError {
    /// Attach the offending file to an error raised while parsing it
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        ContentError::InvalidPost {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error (or the error it wraps) is a missing front-matter block
    pub fn is_missing_frontmatter(&self) -> bool {
        match self {
            ContentError::MissingFrontmatter => true,
            ContentError::InvalidPost { source, .. } => source.is_missing_frontmatter(),
            ContentError::Io { .. } => false,
        }
    }
}
