//! Booking routes - Public intake, admin review

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crucible_core::models::{BookingRequest, CreateBooking};

use crate::error::{ServerError, ServerResult};
use crate::extractors::{RequireAdmin, ValidJson};
use crate::state::AppState;

/// GET /api/bookings - List booking requests, newest first (admin)
pub async fn list_bookings(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> ServerResult<Json<Vec<BookingRequest>>> {
    let bookings = state.db().list_bookings()?;
    Ok(Json(bookings))
}

/// POST /api/bookings - Public booking intake, no auth
pub async fn create_booking(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateBooking>,
) -> ServerResult<(StatusCode, Json<Value>)> {
    req.validate()?;

    let id = state.db().create_booking(&req).map_err(|e| {
        tracing::error!("Booking insert failed: {}", e);
        ServerError::Internal("Failed to create booking request".into())
    })?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}
