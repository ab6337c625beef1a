//! API handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::api::{ApiError, AppState};
use crate::types::Album;
use crate::Error;

/// Health check with catalogue size
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let albums = state.store.len().await;

    state.json(
        StatusCode::OK,
        HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            albums,
        },
    )
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub albums: usize,
}

/// List every album in insertion order
pub async fn list_albums(State(state): State<AppState>) -> impl IntoResponse {
    let albums = state.store.list().await;
    tracing::debug!(count = albums.len(), "Listing albums");

    state.json(StatusCode::OK, albums)
}

/// Fetch the first album whose id matches the path parameter
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let album = state
        .store
        .get(&id)
        .await
        .ok_or_else(|| Error::not_found(id.as_str()))?;

    tracing::debug!(%id, "Album found");
    Ok(state.json(StatusCode::OK, album))
}

/// Append the album in the request body and echo it back
///
/// The body is decoded regardless of its `Content-Type`. A body that does not
/// decode into an album leaves the store untouched.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let album = Album::from_json(&body).map_err(|err| {
        tracing::warn!(error = %err, "Rejected album payload");
        ApiError::from(err)
    })?;

    let album = state.store.insert(album).await;
    tracing::info!(id = %album.id, title = %album.title, "Album created");

    Ok(state.json(StatusCode::CREATED, album))
}
