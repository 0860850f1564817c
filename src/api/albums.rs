//! Album endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Album, DomainError};
use crate::infrastructure::album::CreateAlbumRequest;

/// Message returned when no album matches the requested ID
pub const ALBUM_NOT_FOUND: &str = "album not found";

/// Request body for creating an album
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlbumApiRequest {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<CreateAlbumApiRequest> for CreateAlbumRequest {
    fn from(request: CreateAlbumApiRequest) -> Self {
        Self {
            id: request.id,
            title: request.title,
            artist: request.artist,
            price: request.price,
        }
    }
}

/// GET /albums
pub async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<Album>>, ApiError> {
    debug!("Listing albums");

    let albums = state.album_service.list().await?;

    Ok(Json(albums))
}

/// GET /albums/{id}
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    debug!(id = %id, "Getting album");

    let album = state
        .album_service
        .get(&id)
        .await?
        .ok_or_else(|| DomainError::not_found(ALBUM_NOT_FOUND))?;

    Ok(Json(album))
}

/// POST /albums
pub async fn create_album(
    State(state): State<AppState>,
    Json(request): Json<CreateAlbumApiRequest>,
) -> Result<(StatusCode, Json<Album>), ApiError> {
    debug!(id = %request.id, title = %request.title, "Creating album");

    let album = state.album_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(album)))
}
