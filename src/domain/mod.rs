//! Domain layer - Snippet logic and entities

pub mod album;
pub mod error;
pub mod greeting;
pub mod numeric;
pub mod text;

pub use album::{seed_albums, Album, AlbumRepository};
pub use error::DomainError;
pub use greeting::{greeting, HELLO_WORLD};
pub use numeric::{sum_floats, sum_ints, sum_nums, sum_numbers, Number};
pub use text::{reverse, reverse_str, ReverseError};
