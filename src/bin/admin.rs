//! CLI administration tool for asset-fallback.
//!
//! Operates directly on the configured store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Empty the resolution cache
//! cargo run --bin admin -- cache clear
//!
//! # Count cached resolutions
//! cargo run --bin admin -- cache stats
//!
//! # Show or change the production URL
//! cargo run --bin admin -- settings show
//! cargo run --bin admin -- settings set-production-url https://www.example.com
//! cargo run --bin admin -- settings unset-production-url
//!
//! # Generate a value for ADMIN_TOKEN
//! cargo run --bin admin -- token generate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` / `REDIS_URL` (or their component variables): the store
//! - `LOCAL_BASE_URL` (optional): shown by `settings show` to report whether
//!   fallback is active
//!
//! Settings changed here are picked up by a running server on its next
//! restart or settings save.

use asset_fallback::application::services::{AuthService, CacheService, SettingsService};
use asset_fallback::config::{StoreBackend, StoreConfig};
use asset_fallback::domain::entities::ClearOutcome;
use asset_fallback::infrastructure::store::{self, Store};
use asset_fallback::utils::base_url::normalize_base_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing asset-fallback.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage the resolution cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Manage the production URL setting
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Admin token helpers
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Remove every cached resolution
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the number of cached resolutions
    Stats,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show the stored production URL
    Show,

    /// Store a new production URL
    SetProductionUrl {
        /// Production base URL, e.g. https://www.example.com
        url: String,
    },

    /// Remove the production URL, deactivating fallback
    UnsetProductionUrl,
}

#[derive(Subcommand)]
enum TokenAction {
    /// Print a random token suitable for ADMIN_TOKEN
    Generate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token {
            action: TokenAction::Generate,
        } => {
            println!("{}", AuthService::generate_token());
            Ok(())
        }
        Commands::Cache { action } => {
            let store = connect().await?;
            handle_cache_action(action, &store).await
        }
        Commands::Settings { action } => {
            let store = connect().await?;
            handle_settings_action(action, &store).await
        }
    }
}

/// Connects to the configured persistent store.
async fn connect() -> Result<Store> {
    let config = StoreConfig::from_env()?;
    config.validate()?;

    if config.backend() == StoreBackend::Memory {
        anyhow::bail!("No store configured: set DATABASE_URL or REDIS_URL");
    }

    store::connect(&config)
        .await
        .with_context(|| format!("Failed to connect to {}", config.describe()))
}

/// Dispatches cache commands.
async fn handle_cache_action(action: CacheAction, store: &Store) -> Result<()> {
    let service = CacheService::new(store.cache.clone());

    match action {
        CacheAction::Clear { yes } => {
            println!("{}", "🧹 Clear Resolution Cache".bright_blue().bold());
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Every cached URL will be probed again. Continue?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let outcome = service.clear().await;
            match outcome {
                ClearOutcome::Cleared { .. } => {
                    println!("{}", format!("✅ {}", outcome.message()).green().bold())
                }
                ClearOutcome::NothingToClear => {
                    println!("{}", format!("⚠️  {}", outcome.message()).yellow())
                }
                ClearOutcome::WriteFailed { .. } => {
                    anyhow::bail!(outcome.message());
                }
            }
        }
        CacheAction::Stats => {
            println!("{}", "📊 Cache Statistics".bright_blue().bold());
            println!();

            let entries = service.entry_count().await?;

            println!("  Backend: {}", store.backend.as_str().bright_white());
            println!(
                "  Entries: {}",
                entries.to_string().bright_green().bold()
            );
        }
    }

    println!();
    Ok(())
}

/// Dispatches settings commands.
async fn handle_settings_action(action: SettingsAction, store: &Store) -> Result<()> {
    let local_base_url = match std::env::var("LOCAL_BASE_URL") {
        Ok(raw) => normalize_base_url(&raw).context("LOCAL_BASE_URL is not a valid base URL")?,
        Err(_) => String::new(),
    };
    let service = SettingsService::new(store.settings.clone(), local_base_url);

    let configuration = match action {
        SettingsAction::Show => service.load().await?,
        SettingsAction::SetProductionUrl { url } => {
            let configuration = service.save_production_url(Some(&url)).await?;
            println!("{}", "✅ Production URL saved".green().bold());
            configuration
        }
        SettingsAction::UnsetProductionUrl => {
            let configuration = service.save_production_url(None).await?;
            println!("{}", "✅ Production URL cleared".green().bold());
            configuration
        }
    };

    println!();
    println!("{}", "⚙️  Settings".bright_blue().bold());
    println!();

    let local = if configuration.local_base_url.is_empty() {
        "(LOCAL_BASE_URL not set)".bright_black()
    } else {
        configuration.local_base_url.cyan()
    };
    let production = match configuration.production_base_url.as_deref() {
        Some(url) => url.cyan(),
        None => "(none)".bright_black(),
    };
    let status = if configuration.local_base_url.is_empty() {
        "UNKNOWN".bright_black()
    } else if configuration.is_active() {
        "ACTIVE".green()
    } else {
        "INACTIVE".yellow()
    };

    println!("  Local URL:      {}", local);
    println!("  Production URL: {}", production);
    println!("  Fallback:       {}", status);
    println!();

    Ok(())
}
