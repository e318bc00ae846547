//! CLI administration tool for url-alias.
//!
//! Works directly against the service database, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Save a URL (alias generated when omitted)
//! cargo run --bin admin -- url save https://example.com --alias example
//!
//! # Look up an alias
//! cargo run --bin admin -- url resolve example
//!
//! # List all aliases
//! cargo run --bin admin -- url list
//!
//! # Delete an alias
//! cargo run --bin admin -- url delete example
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or `STORAGE_PATH`.

use url_alias::application::services::UrlService;
use url_alias::config;
use url_alias::domain::entities::SaveRequest;
use url_alias::infrastructure::persistence::{self, SqliteUrlRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing url-alias.
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
    /// Manage aliases
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Save a URL
    Save {
        /// URL to shorten
        url: String,

        /// Alias to use (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the URL behind an alias
    Resolve {
        alias: String,
    },

    /// List all aliases
    List,

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let pool = persistence::connect(&config.database_url, 1)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Url { action } => {
            handle_url_action(action, &pool, config.alias_length).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches alias management commands.
async fn handle_url_action(action: UrlAction, pool: &SqlitePool, alias_length: usize) -> Result<()> {
    let repo = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let service = UrlService::with_alias_length(repo.clone(), alias_length);

    match action {
        UrlAction::Save { url, alias } => save_url(&service, url, alias).await?,
        UrlAction::Resolve { alias } => resolve_alias(&service, &alias).await?,
        UrlAction::List => list_urls(&repo).await?,
        UrlAction::Delete { alias, yes } => delete_alias(&service, &alias, yes).await?,
    }

    Ok(())
}

/// Saves a URL through the same workflow as `POST /`.
async fn save_url(
    service: &UrlService<SqliteUrlRepository>,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Save URL".bright_blue().bold());
    println!();

    let alias = service
        .save(SaveRequest::new(url.clone(), alias))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save URL: {}", e))?;

    println!("  URL:   {}", url.cyan());
    println!("  Alias: {}", alias.bright_yellow().bold());
    println!();
    println!("{}", "✅ Saved".green().bold());

    Ok(())
}

async fn resolve_alias(service: &UrlService<SqliteUrlRepository>, alias: &str) -> Result<()> {
    let url = service
        .resolve(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{}': {}", alias, e))?;

    println!("  {} → {}", alias.bright_yellow(), url.cyan());

    Ok(())
}

/// Lists all aliases.
///
/// # Output Format
///
/// ```text
/// 📋 Aliases
///
///   ID   Alias        URL
///   ──────────────────────────────────────────────
///   1    aB3x         https://example.com
/// ```
async fn list_urls(repo: &SqliteUrlRepository) -> Result<()> {
    println!("{}", "📋 Aliases".bright_blue().bold());
    println!();

    let records = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list aliases: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No aliases found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<12} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for record in &records {
        println!(
            "  {:<4} {:<12} {}",
            record.id.to_string().bright_black(),
            record.alias.bright_yellow(),
            record.url.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes an alias with confirmation prompt.
async fn delete_alias(
    service: &UrlService<SqliteUrlRepository>,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete Alias".bright_blue().bold());
    println!();

    let url = service
        .resolve(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{}': {}", alias, e))?;

    println!("  Alias: {}", alias.bright_yellow());
    println!("  URL:   {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete '{}': {}", alias, e))?;

    println!("{}", "✅ Alias deleted".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:  {}", version.bright_white());
            println!("  Aliases: {}", count.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
