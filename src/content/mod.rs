//! Content module - front-matter, table of contents, footnotes and posts

mod error;
pub mod footnotes;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod scan;
pub mod toc;

pub use error::ContentError;
pub use footnotes::{collect_footnotes, process_footnotes, Footnote};
pub use frontmatter::FrontMatter;
pub use loader::{index_by_slug, parse_post, process_content, ContentLoader};
pub use markdown::MarkdownRenderer;
pub use post::{search, sort_newest_first, Metadata, Post};
pub use toc::{generate_table_of_contents, insert_table_of_contents, Heading};
