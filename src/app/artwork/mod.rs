// Artwork loading for card thumbnails: providers fetch and decode,
// the manager turns results into textures on the UI thread.

mod error;
mod image_data;
mod manager;
mod provider;

pub use error::ArtworkError;
pub use image_data::ImageData;
pub use manager::{ArtworkManager, ArtworkState};
pub use provider::{ArtworkProvider, CachingProvider, NetworkProvider};
