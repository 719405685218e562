//! Journal routes - Foundry journal entries

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crucible_core::models::{CreateJournalEntry, UpdateJournalEntry};

use crate::error::{ServerError, ServerResult};
use crate::extractors::{RequireAdmin, ValidJson, ValidQuery};
use crate::state::AppState;

use super::IdQuery;

#[derive(Debug, Default, Deserialize)]
pub struct JournalQuery {
    pub slug: Option<String>,
    pub published: Option<bool>,
}

/// GET /api/journal - List published entries; `?published=false` adds
/// drafts, `?slug=` fetches one entry regardless of its flag
pub async fn list_journal_entries(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<JournalQuery>,
) -> ServerResult<Response> {
    if let Some(slug) = query.slug.as_deref() {
        let entry = state
            .db()
            .get_journal_entry_by_slug(slug)?
            .ok_or_else(|| ServerError::NotFound(format!("Journal entry '{}' not found", slug)))?;
        return Ok(Json(entry).into_response());
    }

    let include_unpublished = matches!(query.published, Some(false));
    let entries = state.db().list_journal_entries(include_unpublished)?;
    Ok(Json(entries).into_response())
}

/// POST /api/journal - Create an entry (admin)
pub async fn create_journal_entry(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateJournalEntry>,
) -> ServerResult<(StatusCode, Json<Value>)> {
    let id = state.db().create_journal_entry(&req).map_err(|e| {
        tracing::error!("Journal insert failed: {}", e);
        ServerError::Internal("Failed to create journal entry".into())
    })?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/journal - Full update by id in the body (admin)
pub async fn update_journal_entry(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<UpdateJournalEntry>,
) -> ServerResult<Json<Value>> {
    state.db().update_journal_entry(&req).map_err(|e| {
        tracing::error!("Journal update failed: {}", e);
        ServerError::Internal("Failed to update journal entry".into())
    })?;

    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/journal?id= - Delete an entry (admin)
pub async fn delete_journal_entry(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
) -> ServerResult<Json<Value>> {
    let id = query
        .id
        .ok_or_else(|| ServerError::BadRequest("id is required".into()))?;

    state.db().delete_journal_entry(id).map_err(|e| {
        tracing::error!("Journal delete failed: {}", e);
        ServerError::Internal("Failed to delete journal entry".into())
    })?;

    Ok(Json(json!({ "success": true })))
}
