//! Reposync CLI - sync GitHub repository metadata into a Notion database.

mod commands;
mod config;
mod progress;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use console::Term;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reposync")]
#[command(version)]
#[command(about = "Sync GitHub repository metadata into a Notion database")]
#[command(
    long_about = "Reposync keeps a Notion database in step with your GitHub repositories. \
Pages are matched by repository name: existing pages are updated, missing ones are created. \
Repositories can be synced directly, or exported to CSV, edited, and imported."
)]
#[command(after_long_help = r#"EXAMPLES
    Sync all your repositories straight into Notion:
        $ reposync sync

    Include every language, not just the primary one:
        $ reposync sync --languages

    Export to CSV, edit it, then import:
        $ reposync export --file repos.csv
        $ reposync import --file repos.csv

    Dry run to see what would be created or updated:
        $ reposync import --dry-run

    Generate shell completions:
        $ reposync completions bash > ~/.local/share/bash-completion/completions/reposync

CONFIGURATION
    Reposync reads configuration from:
      1. ~/.config/reposync/config.toml (or $XDG_CONFIG_HOME/reposync/config.toml)
      2. ./reposync.toml
      3. Environment variables (REPOSYNC_* prefix, e.g., REPOSYNC_GITHUB_TOKEN)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    REPOSYNC_GITHUB_TOKEN     GitHub personal access token (or GITHUB_TOKEN / GH_PAT)
    REPOSYNC_NOTION_TOKEN     Notion integration token (or NOTION_TOKEN)
    REPOSYNC_NOTION_DATABASE  Target Notion database id (or NOTION_DATABASE_ID)
    REPOSYNC_SYNC_TIMEZONE    Zone for timestamps (default: Asia/Tokyo)
    REPOSYNC_TABULAR_PATH     CSV file path (default: github_repositories.csv)
"#)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export your GitHub repositories to a CSV file
    #[cfg(feature = "github")]
    Export {
        #[command(flatten)]
        file: FileOptions,

        #[command(flatten)]
        zone: ZoneOptions,
    },
    /// Import a CSV file into the Notion database
    #[cfg(feature = "notion")]
    Import {
        #[command(flatten)]
        file: FileOptions,

        #[command(flatten)]
        zone: ZoneOptions,

        /// Dry run - show what would be created or updated without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Sync your GitHub repositories directly into the Notion database
    #[cfg(all(feature = "github", feature = "notion"))]
    Sync {
        #[command(flatten)]
        zone: ZoneOptions,

        /// Dry run - show what would be created or updated without writing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Use every language of each repository for the tech stack
        /// (one extra API request per repository)
        #[arg(short = 'l', long)]
        languages: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// CSV file location.
#[derive(Debug, Clone, Args)]
pub(crate) struct FileOptions {
    /// CSV file path (default from config or github_repositories.csv)
    #[arg(short = 'f', long)]
    pub(crate) file: Option<PathBuf>,
}

/// Target time zone for timestamps.
#[derive(Debug, Clone, Args)]
pub(crate) struct ZoneOptions {
    /// IANA time zone for timestamps (default from config or Asia/Tokyo)
    #[arg(short = 't', long)]
    pub(crate) timezone: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Structured logging only when not attached to a TTY
    if !Term::stdout().is_term() {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("reposync=info,reposync_cli=info"),
        };

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Completions { shell } = &cli.command {
        commands::meta::handle_completions(*shell)?;
        return Ok(());
    }

    // Load configuration (config files -> env vars -> legacy env vars)
    let config = config::Config::load();

    match cli.command {
        #[cfg(feature = "github")]
        Commands::Export { file, zone } => {
            commands::export::handle_export(&config, file, zone).await?;
        }
        #[cfg(feature = "notion")]
        Commands::Import {
            file,
            zone,
            dry_run,
        } => {
            commands::import::handle_import(&config, file, zone, dry_run).await?;
        }
        #[cfg(all(feature = "github", feature = "notion"))]
        Commands::Sync {
            zone,
            dry_run,
            languages,
        } => {
            commands::sync::handle_sync(&config, zone, dry_run, languages).await?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
