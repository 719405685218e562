//! Workshop routes - Bookable casting workshops

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crucible_core::models::{CreateWorkshop, UpdateWorkshop};

use crate::db::workshops::WorkshopFilter;
use crate::error::{ServerError, ServerResult};
use crate::extractors::{RequireAdmin, ValidJson, ValidQuery};
use crate::state::AppState;

use super::IdQuery;

#[derive(Debug, Default, Deserialize)]
pub struct WorkshopQuery {
    pub slug: Option<String>,
    pub upcoming: Option<bool>,
}

/// GET /api/workshops - List workshops, or fetch one by `?slug=`
pub async fn list_workshops(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<WorkshopQuery>,
) -> ServerResult<Response> {
    if let Some(slug) = query.slug.as_deref() {
        let workshop = state
            .db()
            .get_workshop_by_slug(slug)?
            .ok_or_else(|| ServerError::NotFound(format!("Workshop '{}' not found", slug)))?;
        return Ok(Json(workshop).into_response());
    }

    let filter = WorkshopFilter {
        upcoming: query.upcoming,
    };
    let workshops = state.db().list_workshops(filter)?;
    Ok(Json(workshops).into_response())
}

/// POST /api/workshops - Create a workshop (admin)
pub async fn create_workshop(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateWorkshop>,
) -> ServerResult<(StatusCode, Json<Value>)> {
    let id = state.db().create_workshop(&req).map_err(|e| {
        tracing::error!("Workshop insert failed: {}", e);
        ServerError::Internal("Failed to create workshop".into())
    })?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/workshops - Full update by id in the body (admin)
pub async fn update_workshop(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<UpdateWorkshop>,
) -> ServerResult<Json<Value>> {
    // A missing id matches zero rows and still reports success
    state.db().update_workshop(&req).map_err(|e| {
        tracing::error!("Workshop update failed: {}", e);
        ServerError::Internal("Failed to update workshop".into())
    })?;

    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/workshops?id= - Delete a workshop (admin)
pub async fn delete_workshop(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
) -> ServerResult<Json<Value>> {
    let id = query
        .id
        .ok_or_else(|| ServerError::BadRequest("id is required".into()))?;

    state.db().delete_workshop(id).map_err(|e| {
        tracing::error!("Workshop delete failed: {}", e);
        ServerError::Internal("Failed to delete workshop".into())
    })?;

    Ok(Json(json!({ "success": true })))
}
