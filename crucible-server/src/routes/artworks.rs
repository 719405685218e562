//! Artwork routes - Artist portfolio pieces

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crucible_core::models::{Artwork, CreateArtwork, UpdateArtwork};

use crate::error::{ServerError, ServerResult};
use crate::extractors::{RequireAdmin, ValidJson, ValidQuery};
use crate::state::AppState;

use super::IdQuery;

#[derive(Debug, Default, Deserialize)]
pub struct ArtworkQuery {
    pub artist_id: Option<i64>,
}

/// GET /api/artworks - List artworks, optionally `?artist_id=` filtered
pub async fn list_artworks(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ArtworkQuery>,
) -> ServerResult<Json<Vec<Artwork>>> {
    let artworks = state.db().list_artworks(query.artist_id)?;
    Ok(Json(artworks))
}

/// POST /api/artworks - Create an artwork (admin)
pub async fn create_artwork(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateArtwork>,
) -> ServerResult<(StatusCode, Json<Value>)> {
    let id = state.db().create_artwork(&req).map_err(|e| {
        tracing::error!("Artwork insert failed: {}", e);
        ServerError::Internal("Failed to create artwork".into())
    })?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/artworks - Full update by id in the body (admin)
pub async fn update_artwork(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<UpdateArtwork>,
) -> ServerResult<Json<Value>> {
    state.db().update_artwork(&req).map_err(|e| {
        tracing::error!("Artwork update failed: {}", e);
        ServerError::Internal("Failed to update artwork".into())
    })?;

    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/artworks?id= - Delete an artwork (admin)
pub async fn delete_artwork(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<IdQuery>,
) -> ServerResult<Json<Value>> {
    let id = query
        .id
        .ok_or_else(|| ServerError::BadRequest("id is required".into()))?;

    state.db().delete_artwork(id).map_err(|e| {
        tracing::error!("Artwork delete failed: {}", e);
        ServerError::Internal("Failed to delete artwork".into())
    })?;

    Ok(Json(json!({ "success": true })))
}
