//! Auth routes - Admin login

use axum::{extract::State, Json};

use crucible_core::models::{LoginRequest, LoginResponse};

use crate::error::{ServerError, ServerResult};
use crate::extractors::ValidJson;
use crate::state::AppState;

/// POST /api/auth/login - Exchange the admin password for the API token
///
/// The token handed back is the shared secret itself; the admin UI
/// stores it and replays it as a bearer header on every mutation.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> ServerResult<Json<LoginResponse>> {
    let secret = &state.config().admin_token;

    // Empty secret means login is disabled, not passwordless
    if !secret.is_empty() && req.password == *secret {
        Ok(Json(LoginResponse {
            token: req.password,
        }))
    } else {
        Err(ServerError::Unauthorized)
    }
}
