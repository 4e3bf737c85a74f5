//! Songs repository

use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::song::Song,
};

/// Append-only song storage shared by every request
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SongStore: Send + Sync {
    /// All songs in insertion order
    async fn list(&self) -> AppResult<Vec<Song>>;

    /// Append one song
    async fn add(&self, song: Song) -> AppResult<()>;
}

/// Process-wide in-memory store
///
/// The lock makes an append atomic with respect to concurrent listings.
#[derive(Default)]
pub struct InMemorySongStore {
    songs: RwLock<Vec<Song>>,
}

impl InMemorySongStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_songs(songs: Vec<Song>) -> Self {
        Self {
            songs: RwLock::new(songs),
        }
    }

    /// Read a JSON array of songs used to seed the store
    pub async fn load_seed_file(path: &Path) -> AppResult<Vec<Song>> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Internal(format!("Failed to read seed file {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::Internal(format!("Invalid seed file {}: {}", path.display(), e))
        })
    }
}

#[async_trait]
impl SongStore for InMemorySongStore {
    async fn list(&self) -> AppResult<Vec<Song>> {
        Ok(self.songs.read().await.clone())
    }

    async fn add(&self, song: Song) -> AppResult<()> {
        self.songs.write().await.push(song);
        Ok(())
    }
}
