//! sheetroll - roll spreadsheet-defined dice formulas from Discord

mod config;
mod console;
mod discord;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sheetroll::{Commands, HttpSheetFetcher, InMemoryLinkStore, UserId};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "sheetroll")]
#[command(
    author,
    version,
    about = "Roll dice formulas stored in Google Sheets from chat commands"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Command prefix
    #[arg(long, global = true, env = "SHEETROLL_PREFIX", default_value = "!")]
    prefix: String,

    /// Seconds to wait for a sheet download
    #[arg(long, global = true, env = "SHEETROLL_FETCH_TIMEOUT", default_value = "10")]
    fetch_timeout: u64,

    /// CSV export URL with an `{id}` placeholder (default: Google Sheets export)
    #[arg(long, global = true, env = "SHEETROLL_CSV_URL")]
    csv_url_template: Option<String>,

    /// Log filter, e.g. `info` or `sheetroll=debug`
    #[arg(long, global = true, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Connect to Discord and answer commands
    Serve {
        /// Discord bot token
        #[arg(long, env = "DISCORD_BOT_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Read commands from stdin and print replies
    Console {
        /// User id the commands are run as
        #[arg(short, long, default_value = "1")]
        user: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("Invalid log filter '{}'", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = BotConfig::new(
        &cli.prefix,
        cli.fetch_timeout,
        cli.csv_url_template.as_deref(),
    )?;

    match cli.command {
        Command::Serve { token } => {
            let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
                tracing::error!("No Discord bot token configured");
                bail!("DISCORD_BOT_TOKEN is not set; pass --token or set the environment variable");
            };
            let commands = build_commands(&config)?;
            discord::serve(token.trim(), commands).await
        }
        Command::Console { user } => {
            let commands = build_commands(&config)?;
            console::run(
                &commands,
                UserId::new(user),
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
            )
            .await
        }
    }
}

fn build_commands(config: &BotConfig) -> Result<Commands<InMemoryLinkStore, HttpSheetFetcher>> {
    let fetcher =
        HttpSheetFetcher::new(config.fetch.clone()).context("Failed to create HTTP client")?;
    tracing::debug!(
        "Fetching sheets from {} with a {}s timeout",
        config.fetch.url_template,
        config.fetch.timeout.as_secs()
    );

    Ok(Commands::new(InMemoryLinkStore::new(), fetcher).with_prefix(config.prefix.as_str()))
}
