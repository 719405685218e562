//! crucible-server: HTTP API for the foundry content database
//!
//! Exposes workshops, journal entries, artists and the rest of the
//! brochure content as JSON endpoints, with a shared-secret admin gate
//! over every mutation and a public booking intake.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod seed;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use db::Database;
pub use error::{ServerError, ServerResult};
pub use server::{create_router, run_server};
pub use state::AppState;
