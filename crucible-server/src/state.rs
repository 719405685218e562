//! Application state shared across handlers

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    db: Database,
    config: ServerConfig,
}

impl AppState {
    pub fn new(db: Database, config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db, config }),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }
}
