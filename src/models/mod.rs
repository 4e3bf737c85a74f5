//! Data models for Songlist

pub mod song;
pub mod visit;

// Re-export commonly used types
pub use song::{CreateSong, Song, SongListQuery};
pub use visit::VisitState;
