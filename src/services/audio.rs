//! Playable references for songs

use url::Url;

use crate::{
    error::{AppError, AppResult},
    models::song::Song,
};

/// Resolves a song to the URL of its audio file under a base location.
/// Whether the file exists is up to whatever serves that location.
#[derive(Debug, Clone)]
pub struct AudioLocator {
    base: Url,
}

impl AudioLocator {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| AppError::Internal(format!("Invalid audio base URL '{}': {}", base_url, e)))?;

        if base.cannot_be_a_base() {
            return Err(AppError::Internal(format!(
                "Audio base URL '{}' cannot hold paths",
                base_url
            )));
        }

        Ok(Self { base })
    }

    /// File name of a song's audio resource
    pub fn file_name(song: &Song) -> String {
        format!("{} - {}.mp3", song.artist, song.title)
    }

    /// `{base}/{artist} - {title}.mp3`, the file name encoded as one path segment
    pub fn locate(&self, song: &Song) -> String {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&Self::file_name(song));
        }
        url.into()
    }
}
