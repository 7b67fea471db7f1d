//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author = "Indragie Karunaratne")]
#[command(version)]
#[command(about = "Blog content pipeline and GitHub activity for a personal site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List,

    /// Show a processed post
    Show {
        /// Slug of the post (its file name without extension)
        slug: String,

        /// Render the post to HTML
        #[arg(long)]
        html: bool,
    },

    /// Search posts by title, summary and content
    Search {
        /// Case-insensitive search term
        term: String,
    },

    /// Print page metadata (Open Graph, JSON-LD) for a post
    Meta {
        /// Slug of the post
        slug: String,
    },

    /// Show the homepage GitHub section
    Github {
        /// Print the widget data as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio)?;
        }

        Commands::Show { slug, html } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::show::run(&folio, &slug, html)?;
        }

        Commands::Search { term } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::search::run(&folio, &term)?;
        }

        Commands::Meta { slug } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::meta::run(&folio, &slug)?;
        }

        Commands::Github { json } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Fetching GitHub activity for {}", folio.config.github.username);
            folio_rs::commands::github::run(&folio, json).await?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
