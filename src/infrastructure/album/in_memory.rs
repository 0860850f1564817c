//! In-memory album repository

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{Album, AlbumRepository, DomainError};

/// Thread-safe in-memory album collection
///
/// Albums are kept in insertion order. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryAlbumRepository {
    albums: RwLock<Vec<Album>>,
}

impl InMemoryAlbumRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with albums
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumRepository {
    async fn list(&self) -> Result<Vec<Album>, DomainError> {
        let albums = self.albums.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(albums.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Album>, DomainError> {
        let albums = self.albums.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(albums.iter().find(|album| album.id == id).cloned())
    }

    async fn append(&self, album: Album) -> Result<Album, DomainError> {
        let mut albums = self.albums.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        albums.push(album.clone());
        Ok(album)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let albums = self.albums.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(albums.len())
    }
}
