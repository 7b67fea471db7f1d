//! List posts

use anyhow::Result;

use crate::content::Post;
use crate::helpers;
use crate::Folio;

/// Print every post, newest first
pub fn run(folio: &Folio) -> Result<()> {
    let posts = folio.posts_newest_first()?;
    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("{}", format_entry(post));
    }
    Ok(())
}

/// One listing line: date, title, reading time and slug
pub fn format_entry(post: &Post) -> String {
    format!(
        "  {} - {} ({}) [{}]",
        helpers::format_date(&post.metadata.published_at, false),
        post.metadata.title,
        post.reading_time(),
        post.slug
    )
}
