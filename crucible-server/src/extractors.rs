//! Custom Axum extractors

use axum::extract::{FromRef, FromRequest, FromRequestParts, Query, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ServerError;
use crate::state::AppState;

/// Reject the request unless it carries `Authorization: Bearer <token>`
/// matching the configured admin secret.
pub struct RequireAdmin;

impl<S> FromRequestParts<S> for RequireAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let secret = &state.config().admin_token;

        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        // An unconfigured secret locks the admin area rather than opening it
        match bearer {
            Some(token) if !secret.is_empty() && token == secret => Ok(Self),
            _ => Err(ServerError::Unauthorized),
        }
    }
}

/// Json body extractor that reports malformed payloads in the API's
/// `{"error": ...}` shape instead of axum's plain-text rejection.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ServerError::BadRequest(rejection.body_text())),
        }
    }
}

/// Query-string extractor that reports undeserializable parameters in the
/// API's `{"error": ...}` shape instead of axum's plain-text rejection.
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ServerError::BadRequest(rejection.body_text())),
        }
    }
}
