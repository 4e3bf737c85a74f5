//! Repository layer for song storage

pub mod songs;

use std::sync::Arc;

pub use songs::{InMemorySongStore, SongStore};

/// Main repository struct holding the song store
#[derive(Clone)]
pub struct Repository {
    pub songs: Arc<dyn SongStore>,
}

impl Repository {
    /// Create a new repository over the given song store
    pub fn new(songs: Arc<dyn SongStore>) -> Self {
        Self { songs }
    }

    /// Repository backed by an in-memory store seeded with `songs`
    pub fn in_memory(songs: Vec<crate::models::Song>) -> Self {
        Self::new(Arc::new(InMemorySongStore::with_songs(songs)))
    }
}
