//! Album domain module

mod entity;
mod repository;

pub use entity::{seed_albums, Album};
pub use repository::AlbumRepository;

#[cfg(test)]
pub use repository::MockAlbumRepository;
