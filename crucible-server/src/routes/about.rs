//! About routes - About page sections

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crucible_core::models::UpsertAbout;

use crate::error::ServerResult;
use crate::extractors::{RequireAdmin, ValidJson, ValidQuery};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AboutQuery {
    pub section: Option<String>,
}

/// GET /api/about - List sections, or fetch one by `?section=`
///
/// A missing section comes back as `null` with 200; the public page
/// renders absent copy as empty rather than failing.
pub async fn get_about(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<AboutQuery>,
) -> ServerResult<Response> {
    if let Some(section) = query.section.as_deref() {
        let about = state.db().get_about_section(section)?;
        return Ok(Json(about).into_response());
    }

    let sections = state.db().list_about_content()?;
    Ok(Json(sections).into_response())
}

/// POST /api/about - Create or replace a section (admin)
pub async fn upsert_about(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<UpsertAbout>,
) -> ServerResult<Json<Value>> {
    state.db().upsert_about_section(&req)?;
    Ok(Json(json!({ "success": true })))
}
