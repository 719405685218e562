//! Artist routes - Represented artists and their profiles

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crucible_core::models::{CreateArtist, UpdateArtist};

use crate::error::{ServerError, ServerResult};
use crate::extractors::{RequireAdmin, ValidJson, ValidQuery};
use crate::state::AppState;

use super::{IdQuery, SlugQuery};

/// GET /api/artists - List artists, or fetch a profile by `?slug=`
///
/// The slug form returns the artist with their artworks inlined, or
/// `null` with 200 on a miss (the public page handles the null itself).
pub async fn list_artists(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<SlugQuery>,
) -> ServerResult<Response> {
    if let Some(slug) = query.slug.as_deref() {
        let profile = state.db().get_artist_profile(slug)?;
        return Ok(Json(profile).into_response());
    }

    let artists = state.db().list_artists()?;
    Ok(Json(artists).into_response())
}

/// POST /api/artists - Create an artist (admin)
pub async fn create_artist(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateArtist>,
) -> ServerResult<(StatusCode, Json<Value>)> {
    let id = state.db().create_artist(&req).map_err(|e| {
        tracing::error!("Artist insert failed: {}", e);
        ServerError::Internal("Failed to create artist".into())
    })?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/artists - Full update by id in the body (admin)
pub async fn update_artist(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<UpdateArtist>,
) -> ServerResult<Json<Value>> {
    state.db().update_artist(&req).map_err(|e| {
        tracing::error!("Artist update failed: {}", e);
        ServerError::Internal("Failed to update artist".into())
    })?;

    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/artists?id= - Delete an artist and their artworks (admin)
pub async fn delete_artist(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
) -> ServerResult<Json<Value>> {
    let id = query
        .id
        .ok_or_else(|| ServerError::BadRequest("id is required".into()))?;

    state.db().delete_artist(id).map_err(|e| {
        tracing::error!("Artist delete failed: {}", e);
        ServerError::Internal("Failed to delete artist".into())
    })?;

    Ok(Json(json!({ "success": true })))
}
