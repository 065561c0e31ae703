//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use folio_gists::{GistClient, render_feed};
use folio_shared::{GistFeed, init_config, load_config};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Folio — portfolio site data tooling.
#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Fetch and render GitHub Gists for a portfolio site, and manage its configuration.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Fetch a user's public gists and render them as an HTML page.
    Gists {
        /// GitHub username (defaults to [gists].username from config).
        username: Option<String>,

        /// Write the rendered HTML to this file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "folio_cli=info,folio_shared=info,folio_gists=info",
        1 => "folio_cli=debug,folio_shared=debug,folio_gists=debug",
        _ => "folio_cli=trace,folio_shared=trace,folio_gists=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Gists { username, out } => cmd_gists(username.as_deref(), out.as_deref()).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_gists(username: Option<&str>, out: Option<&std::path::Path>) -> Result<()> {
    let config = load_config()?;
    config.site.validate()?;

    // CLI arg wins over the config file's default username.
    let username = match username {
        Some(u) => u.to_string(),
        None => config.gists.username.clone(),
    };
    if username.is_empty() {
        return Err(eyre!(
            "no username given and [gists].username is empty in the config file"
        ));
    }

    info!(username, "fetching gist listing");

    let client = GistClient::new(&config.gists)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner.set_message(format!("Fetching gists for {username}"));

    let feed = client.load_feed(&username).await;
    spinner.finish_and_clear();

    // A failed fetch still produces a page; the notice is in the HTML and
    // the reason is in the log.
    match &feed {
        GistFeed::Loaded { gists, .. } => info!(count = gists.len(), "gists loaded"),
        GistFeed::Empty { .. } => info!("no public gists for this user"),
        GistFeed::Failed { reason } => warn!(reason, "rendering fallback page"),
    }

    let html = render_feed(&feed);

    match out {
        Some(path) => {
            std::fs::write(path, &html)
                .map_err(|e| eyre!("cannot write {}: {e}", path.display()))?;
            println!("  Wrote {} bytes to {}", html.len(), path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("  Wrote default config to {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    config.site.validate()?;
    let rendered = toml::to_string_pretty(&config)?;
    print!("{rendered}");
    Ok(())
}
