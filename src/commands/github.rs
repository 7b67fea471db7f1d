//! Show the homepage GitHub section

use anyhow::Result;

use crate::Folio;

/// Fetch and print GitHub activity, as text or JSON
pub async fn run(folio: &Folio, json: bool) -> Result<()> {
    let widget = folio.github_widget().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&widget)?);
    } else {
        println!("{}", widget.to_text());
    }

    Ok(())
}
