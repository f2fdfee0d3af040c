//! CLI administration tool for redis-shortener.
//!
//! Drives the same link engine as the HTTP service, directly against Redis.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL for two hours
//! cargo run --bin admin -- shorten https://www.baidu.com --expiration 120
//!
//! # Resolve a short code
//! cargo run --bin admin -- resolve IFHZzaO
//!
//! # Show the detail record
//! cargo run --bin admin -- info IFHZzaO
//!
//! # Check Redis connectivity
//! cargo run --bin admin -- ping
//!
//! # Convert between counter values and codes (offline)
//! cargo run --bin admin -- encode 125
//! cargo run --bin admin -- decode 21
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `REDIS_URL` or `REDIS_HOST`/`REDIS_PORT`/`REDIS_PASSWORD`/`REDIS_DB`,
//! and `REDIS_COMMAND_TIMEOUT_MS`.

use redis_shortener::config::{self, Config};
use redis_shortener::domain::entities::MAX_EXPIRATION_MINUTES;
use redis_shortener::domain::error::ErrorKind;
use redis_shortener::domain::repositories::KeyValueStore;
use redis_shortener::infrastructure::store::RedisStore;
use redis_shortener::utils::base62;
use redis_shortener::utils::target_url::check_target_url;
use redis_shortener::LinkService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing redis-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// The long URL
        url: String,

        /// Lifetime in minutes
        #[arg(short, long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..=MAX_EXPIRATION_MINUTES))]
        expiration: u64,
    },

    /// Resolve a short code to its URL
    Resolve {
        code: String,
    },

    /// Show the detail record of a short code
    Info {
        code: String,
    },

    /// Check Redis connection
    Ping,

    /// Encode a counter value as a short code
    Encode {
        value: u64,
    },

    /// Decode a short code into its counter value
    Decode {
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Shorten { url, expiration } => {
            check_target_url(&url).with_context(|| format!("'{url}' cannot be shortened"))?;
            shorten(&link_service().await?, &url, expiration).await
        }
        Commands::Resolve { code } => resolve(&link_service().await?, &code).await,
        Commands::Info { code } => info(&link_service().await?, &code).await,
        Commands::Ping => ping(connect().await?.as_ref()).await,
        Commands::Encode { value } => {
            println!("{}", base62::encode(value).bright_yellow().bold());
            Ok(())
        }
        Commands::Decode { code } => {
            let value = base62::decode(&code).with_context(|| format!("Cannot decode '{code}'"))?;
            println!("{}", value.to_string().bright_yellow().bold());
            Ok(())
        }
    }
}

/// Connects to the Redis instance named by the environment.
async fn connect() -> Result<Arc<dyn KeyValueStore>> {
    let config: Config = config::load_from_env()?;
    let store = RedisStore::connect(&config.redis_url, config.redis_command_timeout())
        .await
        .context("Failed to connect to Redis")?;
    Ok(Arc::new(store))
}

async fn link_service() -> Result<LinkService<dyn KeyValueStore>> {
    Ok(LinkService::new(connect().await?))
}

async fn shorten(service: &LinkService<dyn KeyValueStore>, url: &str, minutes: u64) -> Result<()> {
    let code = service
        .shorten(url, minutes)
        .await
        .context("Failed to shorten URL")?;

    println!("{}", "✅ Short link ready".green().bold());
    println!("  Code:    {}", code.bright_yellow().bold());
    println!("  Target:  {}", url.cyan());
    println!("  Expires: in {} minute(s)", minutes);

    Ok(())
}

async fn resolve(service: &LinkService<dyn KeyValueStore>, code: &str) -> Result<()> {
    match service.unshorten(code).await {
        Ok(url) => println!("{} → {}", code.bright_yellow(), url.cyan()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("{}", format!("❌ {code} not found or expired").red());
        }
        Err(e) => return Err(e).context("Failed to resolve short code"),
    }

    Ok(())
}

async fn info(service: &LinkService<dyn KeyValueStore>, code: &str) -> Result<()> {
    match service.shortlink_info(code).await {
        Ok(detail) => {
            println!("{}", format!("Short link {code}").bright_white().bold());
            println!("  URL:        {}", detail.url.cyan());
            println!("  Created at: {}", detail.created_at.to_rfc3339());
            println!("  Expiration: {} minute(s)", detail.expiration_in_minutes);
            match detail.expires_at() {
                Some(at) => println!("  Expires at: {}", at.to_rfc3339()),
                None => println!("  Expires at: {}", "out of range".yellow()),
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("{}", format!("❌ No details for {code}").red());
        }
        Err(e) => return Err(e).context("Failed to load short link details"),
    }

    Ok(())
}

async fn ping(store: &dyn KeyValueStore) -> Result<()> {
    store.ping().await.context("Redis PING failed")?;
    println!("{}", "✅ Redis connection OK".green().bold());
    Ok(())
}
