//! Album repository trait

use async_trait::async_trait;

use super::Album;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository holding the album collection
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// List all albums in insertion order
    async fn list(&self) -> Result<Vec<Album>, DomainError>;

    /// Find the first album with the given ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Album>, DomainError>;

    /// Append an album to the collection
    async fn append(&self, album: Album) -> Result<Album, DomainError>;

    /// Number of albums in the collection
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}
