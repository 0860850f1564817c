//! Primer
//!
//! A handful of small, independent snippets:
//! - Hello World and a greeting helper
//! - Generic summation over numeric map values
//! - Character-wise string reversal, checked with property tests
//! - An in-memory album CRUD API served over HTTP

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::seed_albums;
use infrastructure::album::{AlbumService, InMemoryAlbumRepository};
use tracing::info;

/// Create the application state with a freshly seeded album store
pub fn create_app_state() -> AppState {
    let albums = seed_albums();
    info!(count = albums.len(), "Seeding in-memory album store");

    let repository = Arc::new(InMemoryAlbumRepository::with_albums(albums));
    let album_service = Arc::new(AlbumService::new(repository));

    AppState::new(album_service)
}
