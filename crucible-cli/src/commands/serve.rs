//! HTTP server command
//!
//! Runs the content API, optionally seeding an empty database first and
//! serving a built front-end alongside it.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crucible_server::{run_server, Database, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:4000)
    #[arg(long, short = 'b', env = "CRUCIBLE_BIND", default_value = "127.0.0.1:4000")]
    pub bind: SocketAddr,

    /// SQLite database file
    #[arg(long, env = "CRUCIBLE_DB", default_value = "data/crucible.db")]
    pub db: PathBuf,

    /// Shared admin secret for login and all mutations
    #[arg(long, env = "CRUCIBLE_ADMIN_TOKEN")]
    pub admin_token: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Serve a built front-end from this directory
    #[arg(long, env = "CRUCIBLE_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Seed sample content into an empty database before serving
    #[arg(long)]
    pub seed: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    if args.seed {
        let db = Database::open(args.db.as_path())
            .with_context(|| format!("Failed to open database at {}", args.db.display()))?;
        let report = crucible_server::seed::run(&db).context("Failed to seed database")?;
        tracing::info!("Seeded {} rows before startup", report.total());
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        db_path: args.db,
        admin_token: args.admin_token.unwrap_or_default(),
        cors_permissive: args.cors_permissive,
        static_dir: args.static_dir,
    };

    // Blocks until shutdown
    run_server(config).await.context("Server error")?;

    Ok(())
}
