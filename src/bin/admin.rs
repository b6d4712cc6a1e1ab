//! CLI administration tool for link-shortener.
//!
//! Provides database setup and inspection without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create or update the schema
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Inspect one short code
//! cargo run --bin admin -- show abc123
//! ```
//!
//! # Environment Variables
//!
//! Database settings are read the same way as the server
//! (`DATABASE_URL` or the `POSTGRES_*` components).

use link_shortener::application::services::MappingService;
use link_shortener::config::Config;
use link_shortener::infrastructure::persistence::PgMappingRepository;
use link_shortener::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
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
    /// Show statistics
    Stats,

    /// Show details of one short code
    Show {
        /// Short code to inspect
        short_code: String,
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

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Show { short_code } => handle_show(&config, pool, &short_code).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of mappings
/// - Total number of recorded accesses
/// - Number of mappings never accessed
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (mappings, accesses, unvisited): (i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT COUNT(*),
               COALESCE(SUM(access_count), 0)::BIGINT,
               COUNT(*) FILTER (WHERE access_count = 0)
        FROM url_mappings
        "#,
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Mappings:      {}",
        mappings.to_string().bright_green().bold()
    );
    println!(
        "  Accesses:      {}",
        accesses.to_string().bright_green().bold()
    );
    println!("  Never visited: {}", unvisited.to_string().bright_black());
    println!();

    Ok(())
}

/// Prints one mapping without counting it as an access.
async fn handle_show(config: &Config, pool: PgPool, short_code: &str) -> Result<()> {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let service = MappingService::new(
        repository,
        config.base_url.clone(),
        config.short_code_length,
    );

    let mapping = service
        .get_mapping(short_code)
        .await
        .with_context(|| format!("Failed to look up '{}'", short_code))?;

    println!("{}", "🔗 Short URL".bright_blue().bold());
    println!();
    println!("  Code:          {}", mapping.short_code.cyan());
    println!("  Short URL:     {}", service.short_url(&mapping.short_code));
    println!("  Original URL:  {}", mapping.original_url);
    println!("  Created:       {}", mapping.created_at.to_rfc3339());
    println!(
        "  Last accessed: {}",
        mapping
            .last_accessed
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "never".to_string())
            .bright_black()
    );
    println!(
        "  Accesses:      {}",
        mapping.access_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "✅ Schema is up to date".green().bold());
        }
    }

    Ok(())
}
