//! Song catalog service

use crate::{
    error::{AppError, AppResult},
    models::song::{CreateSong, Song},
    repository::Repository,
};

#[derive(Clone)]
pub struct SongsService {
    repository: Repository,
}

impl SongsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Songs in store order, narrowed to an exact artist match when `artist` is
    /// non-blank
    pub async fn list(&self, artist: Option<&str>) -> AppResult<Vec<Song>> {
        let songs = self.repository.songs.list().await?;

        Ok(match artist.filter(|a| !a.trim().is_empty()) {
            Some(artist) => songs.into_iter().filter(|s| s.artist == artist).collect(),
            None => songs,
        })
    }

    /// Append a song from a submitted form. Nothing is stored when `year` is not
    /// an integer.
    pub async fn create(&self, data: CreateSong) -> AppResult<Song> {
        let year: i32 = data.year.parse().map_err(|_| {
            AppError::Validation(format!("Invalid year '{}': expected an integer", data.year))
        })?;

        let song = Song {
            title: data.title,
            album: data.album,
            year,
            artist: data.artist,
            genre: data.genre,
        };

        self.repository.songs.add(song.clone()).await?;
        tracing::info!("Added song '{}' by '{}'", song.title, song.artist);
        Ok(song)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use super::*;
    use crate::repository::songs::MockSongStore;

    fn catalog() -> Vec<Song> {
        vec![
            Song::new("Imagine", "Imagine", 1971, "John Lennon", "Rock"),
            Song::new("Bohemian Rhapsody", "A Night at the Opera", 1975, "Queen", "Rock"),
            Song::new("Don't Stop Me Now", "Jazz", 1978, "Queen", "Rock"),
        ]
    }

    fn service_listing(songs: Vec<Song>) -> SongsService {
        let mut store = MockSongStore::new();
        store.expect_list().returning(move || Ok(songs.clone()));
        SongsService::new(Repository::new(Arc::new(store)))
    }

    fn form(year: &str) -> CreateSong {
        CreateSong {
            title: "Imagine".to_string(),
            album: "Imagine".to_string(),
            year: year.to_string(),
            artist: "John Lennon".to_string(),
            genre: "Rock".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_without_filter_returns_everything_in_order() {
        let service = service_listing(catalog());
        assert_eq!(service.list(None).await.unwrap(), catalog());
        assert_eq!(service.list(Some("")).await.unwrap(), catalog());
        assert_eq!(service.list(Some("   ")).await.unwrap(), catalog());
    }

    #[tokio::test]
    async fn test_list_filters_on_exact_artist() {
        let service = service_listing(catalog());

        let queen = service.list(Some("Queen")).await.unwrap();
        assert_eq!(queen.len(), 2);
        assert!(queen.iter().all(|s| s.artist == "Queen"));
        assert_eq!(queen[0].title, "Bohemian Rhapsody");

        assert!(service.list(Some("queen")).await.unwrap().is_empty());
        assert!(service.list(Some("Queen ")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_appends_parsed_song() {
        let mut store = MockSongStore::new();
        store
            .expect_add()
            .with(eq(Song::new("Imagine", "Imagine", 1971, "John Lennon", "Rock")))
            .times(1)
            .returning(|_| Ok(()));
        let service = SongsService::new(Repository::new(Arc::new(store)));

        let song = service.create(form("1971")).await.unwrap();
        assert_eq!(song.year, 1971);
    }

    #[tokio::test]
    async fn test_create_with_bad_year_appends_nothing() {
        let mut store = MockSongStore::new();
        store.expect_add().never();
        let service = SongsService::new(Repository::new(Arc::new(store)));

        for year in ["", "nineteen", "1971.0", " 1971"] {
            let result = service.create(form(year)).await;
            assert!(matches!(result, Err(AppError::Validation(_))), "year {:?}", year);
        }
    }
}
