//! CLI administration tool for short-url-service.
//!
//! Works directly against the configured PostgreSQL table, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every mapping
//! cargo run --bin admin -- list
//!
//! # Shorten a URL (returns the existing alias if already stored)
//! cargo run --bin admin -- shorten https://www.bbc.co.uk/news
//!
//! # Look up an alias
//! cargo run --bin admin -- resolve aZ1hjdg
//!
//! # Check database connection / create the table
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db init
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*` components), `DB_NAME`,
//! `URL_TABLE`, `CODE_MAX_ATTEMPTS`.

use short_url_service::application::services::UrlService;
use short_url_service::config::{self, Config};
use short_url_service::domain::repositories::UrlMappingRepository;
use short_url_service::error::AppError;
use short_url_service::infrastructure::persistence::PgUrlMappingRepository;
use short_url_service::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing short-url-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List every stored mapping
    List,

    /// Create a short URL for a long URL
    Shorten {
        /// Absolute URL to shorten
        long_url: String,
    },

    /// Show the long URL behind a short code
    Resolve {
        /// 7-character short code
        short_url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the url mapping table and indexes if missing
    Init {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let repository = Arc::new(open_repository(&config).await?);

    match cli.command {
        Commands::List => list_mappings(service(&config, &repository)).await?,
        Commands::Shorten { long_url } => {
            shorten(service(&config, &repository), &long_url).await?
        }
        Commands::Resolve { short_url } => {
            resolve(service(&config, &repository), &short_url).await?
        }
        Commands::Db { action } => handle_db_action(action, &repository).await?,
    }

    Ok(())
}

async fn open_repository(config: &Config) -> Result<PgUrlMappingRepository> {
    let pool = connect_pool(config).await?;

    Ok(PgUrlMappingRepository::with_table(
        Arc::new(pool),
        &config.url_table,
    )?)
}

fn service(config: &Config, repository: &Arc<PgUrlMappingRepository>) -> UrlService {
    UrlService::with_max_attempts(repository.clone(), config.code_max_attempts)
}

/// Lists all mappings.
///
/// # Output Format
///
/// ```text
/// 📋 Url Mappings
///
///   Short    Long URL
///   ──────────────────────────────────────────────
///   aZ1hjdg  https://www.bbc.co.uk/news
/// ```
async fn list_mappings(service: UrlService) -> Result<()> {
    println!("{}", "📋 Url Mappings".bright_blue().bold());
    println!();

    let mappings = service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<8} {}",
        "Short".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!("  {:<8} {}", mapping.short_url.cyan(), mapping.long_url);
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Creates (or fetches) the mapping for `long_url`.
async fn shorten(service: UrlService, long_url: &str) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    match service.create(long_url).await {
        Ok(mapping) => {
            println!("  Long URL:  {}", mapping.long_url.cyan());
            println!("  Short URL: {}", mapping.short_url.bright_yellow().bold());
            println!();
            Ok(())
        }
        Err(e @ (AppError::InvalidUrl | AppError::AliasUnavailable { .. })) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to shorten url: {}", e)),
    }
}

/// Prints the long URL behind `short_url`.
async fn resolve(service: UrlService, short_url: &str) -> Result<()> {
    match service.resolve(short_url).await {
        Ok(mapping) => {
            println!("  {} → {}", mapping.short_url.cyan(), mapping.long_url);
            Ok(())
        }
        Err(AppError::NotFound) => {
            println!(
                "{}",
                format!("⚠️  No mapping for '{}'", short_url).yellow()
            );
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, repository: &PgUrlMappingRepository) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repository
                .health_check()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Init { yes } => {
            println!(
                "  Table: {}",
                repository.table().to_string().bright_white()
            );
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Create table and indexes if missing?")
                    .default(true)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            repository
                .ensure_schema()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create schema: {}", e))?;

            println!("{}", "✅ Schema ready".green().bold());
        }
    }

    Ok(())
}
