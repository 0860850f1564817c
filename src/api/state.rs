//! Application state for shared services

use std::sync::Arc;

use crate::domain::{Album, AlbumRepository, DomainError};
use crate::infrastructure::album::{AlbumService, CreateAlbumRequest};

/// Application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub album_service: Arc<dyn AlbumServiceTrait>,
}

/// Trait for album service operations
#[async_trait::async_trait]
pub trait AlbumServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Album>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<Album>, DomainError>;
    async fn create(&self, request: CreateAlbumRequest) -> Result<Album, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: AlbumRepository + 'static> AlbumServiceTrait for AlbumService<R> {
    async fn list(&self) -> Result<Vec<Album>, DomainError> {
        AlbumService::list(self).await
    }

    async fn get(&self, id: &str) -> Result<Option<Album>, DomainError> {
        AlbumService::get(self, id).await
    }

    async fn create(&self, request: CreateAlbumRequest) -> Result<Album, DomainError> {
        AlbumService::create(self, request).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        AlbumService::count(self).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(album_service: Arc<dyn AlbumServiceTrait>) -> Self {
        Self { album_service }
    }
}
