//! Album storage and service

mod in_memory;
mod service;

pub use in_memory::InMemoryAlbumRepository;
pub use service::{AlbumService, CreateAlbumRequest};
