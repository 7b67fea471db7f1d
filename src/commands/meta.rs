//! Print page metadata for a post

use anyhow::{anyhow, Result};

use crate::Folio;

/// Print the Open Graph image, canonical URL and JSON-LD for a post
pub fn run(folio: &Folio, slug: &str) -> Result<()> {
    let post = folio
        .post(slug)?
        .ok_or_else(|| anyhow!("No post with slug: {}", slug))?;

    let document = serde_json::json!({
        "title": post.metadata.title,
        "description": post.metadata.summary,
        "url": folio.config.post_url(&post.slug),
        "ogImage": post.og_image(&folio.config),
        "structuredData": post.structured_data(&folio.config),
    });

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
