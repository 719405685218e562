//! Server configuration
//!
//! Assembled by the CLI from flags and environment variables, or built
//! directly (see `with_token`) when the server is embedded in tests.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Shared admin secret: login password and bearer token for mutations
    pub admin_token: String,
    /// Allow any origin instead of the localhost dev allowlist
    pub cors_permissive: bool,
    /// Directory of static front-end assets to serve, if any
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Create config with an explicit admin token (for testing)
    pub fn with_token(admin_token: impl Into<String>) -> Self {
        Self {
            bind_addr: default_bind_addr(),
            db_path: PathBuf::from(":memory:"),
            admin_token: admin_token.into(),
            cors_permissive: false,
            static_dir: None,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 4000))
}
