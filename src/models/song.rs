//! Song model and request types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A song record. Immutable once created; the store is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Song {
    pub title: String,
    pub album: String,
    pub year: i32,
    pub artist: String,
    pub genre: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        album: impl Into<String>,
        year: i32,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            album: album.into(),
            year,
            artist: artist.into(),
            genre: genre.into(),
        }
    }
}

/// Form submitted to add a song
///
/// `year` is kept as submitted; the service parses it.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSong {
    pub title: String,
    pub album: String,
    /// Release year, must parse as an integer
    pub year: String,
    pub artist: String,
    pub genre: String,
}

/// Query parameters of the listing page
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct SongListQuery {
    /// Locale code, takes precedence over the `lang` cookie
    pub lang: Option<String>,
    /// Exact artist name to filter on; blank shows every song
    pub artist: Option<String>,
}
