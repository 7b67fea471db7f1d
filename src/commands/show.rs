//! Show a single post

use anyhow::{anyhow, Result};

use crate::content::MarkdownRenderer;
use crate::helpers;
use crate::Folio;

/// Print a post's processed content, or its rendered HTML
pub fn run(folio: &Folio, slug: &str, html: bool) -> Result<()> {
    let post = folio
        .post(slug)?
        .ok_or_else(|| anyhow!("No post with slug: {}", slug))?;

    if html {
        let renderer = MarkdownRenderer::with_options(&folio.config.highlight);
        println!("{}", renderer.render(&post.content)?);
        return Ok(());
    }

    println!("{}", post.metadata.title);
    println!(
        "{} · {}",
        helpers::format_date(&post.metadata.published_at, true),
        post.reading_time()
    );
    println!("Source: {}", folio.config.post_source_url(&post.slug));
    println!();
    println!("{}", post.content);

    Ok(())
}
