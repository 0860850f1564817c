//! Album service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Album, AlbumRepository, DomainError};

/// Request for creating a new album
#[derive(Debug, Clone)]
pub struct CreateAlbumRequest {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Album service owning the album repository
#[derive(Debug)]
pub struct AlbumService<R: AlbumRepository> {
    repository: Arc<R>,
}

impl<R: AlbumRepository> AlbumService<R> {
    /// Create a new album service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List every album
    pub async fn list(&self) -> Result<Vec<Album>, DomainError> {
        self.repository.list().await
    }

    /// Get the first album with the given ID
    pub async fn get(&self, id: &str) -> Result<Option<Album>, DomainError> {
        debug!(id = %id, "Looking up album");
        self.repository.find_by_id(id).await
    }

    /// Append a new album. Duplicate IDs are accepted.
    pub async fn create(&self, request: CreateAlbumRequest) -> Result<Album, DomainError> {
        info!(id = %request.id, title = %request.title, "Creating album");

        let album = Album::new(request.id, request.title, request.artist, request.price);
        self.repository.append(album).await
    }

    /// Number of albums currently stored
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
