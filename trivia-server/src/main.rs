//! `trivia` - run the trivia REST backend
//!
//! Usage:
//!   trivia --database-url postgres://localhost/trivia
//!   trivia --memory --cors-permissive      # no database, any origin
//!   RUST_LOG=trivia_server=debug trivia    # fine-grained log control
//!
//! Every flag can also come from the environment (or a `.env` file):
//!   DATABASE_URL, TRIVIA_BIND_ADDR, TRIVIA_MAX_CONNECTIONS, TRIVIA_DB_TIMEOUT_SECS,
//!   TRIVIA_CORS_PERMISSIVE

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trivia_server::db::pool::{
    create_pool, PoolSettings, DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS,
};
use trivia_server::{run_server, AppState, MemoryStore, PgStore, ServerConfig, TriviaStore};

#[derive(Parser, Debug)]
#[command(name = "trivia", version, about = "REST backend for the trivia app")]
struct Args {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", required_unless_present = "memory")]
    database_url: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long, env = "TRIVIA_BIND_ADDR", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Maximum connections in the database pool
    #[arg(long, env = "TRIVIA_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,

    /// Seconds to wait for a free database connection before failing a request
    #[arg(long, env = "TRIVIA_DB_TIMEOUT_SECS", default_value_t = DEFAULT_ACQUIRE_TIMEOUT_SECS)]
    db_timeout_secs: u64,

    /// Allow any CORS origin instead of the local frontend only
    #[arg(long, env = "TRIVIA_CORS_PERMISSIVE")]
    cors_permissive: bool,

    /// Serve from an in-memory store with the default categories
    /// (takes precedence over DATABASE_URL)
    #[arg(long)]
    memory: bool,

    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

async fn open_store(args: &Args) -> Result<Arc<dyn TriviaStore>> {
    if args.memory {
        tracing::info!("Using in-memory store");
        return Ok(Arc::new(MemoryStore::with_default_categories()));
    }

    let url = args
        .database_url
        .as_deref()
        .context("DATABASE_URL is required without --memory")?;
    let settings = PoolSettings {
        max_connections: args.max_connections,
        acquire_timeout: Duration::from_secs(args.db_timeout_secs),
    };
    let pool = create_pool(url, &settings)
        .await
        .context("failed to connect to database")?;
    tracing::info!(
        max_connections = settings.max_connections,
        acquire_timeout_secs = args.db_timeout_secs,
        "Database pool ready"
    );

    Ok(Arc::new(PgStore::new(pool)))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.debug)?;

    let store = open_store(&args).await?;
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(AppState::new(store), config)
        .await
        .context("server error")?;

    Ok(())
}
