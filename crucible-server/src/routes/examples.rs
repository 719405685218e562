//! Workshop example routes - Showcase pieces

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crucible_core::models::{CreateExample, UpdateExample};

use crate::error::{ServerError, ServerResult};
use crate::extractors::{RequireAdmin, ValidJson, ValidQuery};
use crate::state::AppState;

use super::{IdQuery, SlugQuery};

/// GET /api/workshop-examples - List examples, or fetch one by `?slug=`
pub async fn list_examples(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<SlugQuery>,
) -> ServerResult<Response> {
    if let Some(slug) = query.slug.as_deref() {
        let example = state
            .db()
            .get_example_by_slug(slug)?
            .ok_or_else(|| ServerError::NotFound(format!("Example '{}' not found", slug)))?;
        return Ok(Json(example).into_response());
    }

    let examples = state.db().list_examples()?;
    Ok(Json(examples).into_response())
}

/// POST /api/workshop-examples - Create an example (admin)
pub async fn create_example(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateExample>,
) -> ServerResult<(StatusCode, Json<Value>)> {
    let id = state.db().create_example(&req).map_err(|e| {
        tracing::error!("Example insert failed: {}", e);
        ServerError::Internal("Failed to create example".into())
    })?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/workshop-examples - Full update by id in the body (admin)
pub async fn update_example(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<UpdateExample>,
) -> ServerResult<Json<Value>> {
    state.db().update_example(&req).map_err(|e| {
        tracing::error!("Example update failed: {}", e);
        ServerError::Internal("Failed to update example".into())
    })?;

    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/workshop-examples?id= - Delete an example (admin)
pub async fn delete_example(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
) -> ServerResult<Json<Value>> {
    let id = query
        .id
        .ok_or_else(|| ServerError::BadRequest("id is required".into()))?;

    state.db().delete_example(id).map_err(|e| {
        tracing::error!("Example delete failed: {}", e);
        ServerError::Internal("Failed to delete example".into())
    })?;

    Ok(Json(json!({ "success": true })))
}
