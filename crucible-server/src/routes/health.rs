//! Health check route

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "database": {
            "path": state.db().path().display().to_string(),
            "size_bytes": state.db().size_bytes(),
        },
    }))
}
