//! Folio CLI — build-time helper for a personal portfolio site.
//!
//! Fetches a user's public GitHub Gists and renders them to an HTML page,
//! and manages the site's configuration file.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
