//! Search posts

use anyhow::Result;

use super::list::format_entry;
use crate::content;
use crate::Folio;

/// Print posts whose title, summary or content contains `term`
pub fn run(folio: &Folio, term: &str) -> Result<()> {
    let posts = folio.posts_newest_first()?;
    let found = content::search(&posts, term);

    if found.is_empty() {
        println!("No posts found matching \"{}\"", term);
        return Ok(());
    }

    println!("Posts matching \"{}\" ({}):", term, found.len());
    for post in found {
        println!("{}", format_entry(post));
    }
    Ok(())
}
