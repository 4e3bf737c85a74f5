//! Listing page assembly: songs, localized labels and visit tracking

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{song::Song, visit::VisitState},
    services::{
        audio::AudioLocator,
        i18n::{keys, ResourceBundle},
        sessions::Session,
        songs::SongsService,
        visits::{Clock, VisitTracker},
    },
    views::{render_song_list, ColumnLabels, SongListPage, SongRow},
};

#[derive(Clone)]
pub struct ListingService {
    songs: SongsService,
    bundle: Arc<ResourceBundle>,
    audio: AudioLocator,
    clock: Arc<dyn Clock>,
}

impl ListingService {
    pub fn new(
        songs: SongsService,
        bundle: Arc<ResourceBundle>,
        audio: AudioLocator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            songs,
            bundle,
            audio,
            clock,
        }
    }

    /// Render the listing page in `lang` and record the visit in `session`.
    ///
    /// The page shows the visit count as it was before this request; the
    /// incremented count is written only once rendering succeeded.
    pub async fn render(
        &self,
        lang: &str,
        artist: Option<&str>,
        session: &mut Session,
    ) -> AppResult<String> {
        let shown = VisitTracker::read(session, self.clock.now());
        let songs = self.songs.list(artist).await?;

        tracing::debug!(
            lang,
            artist = artist.unwrap_or_default(),
            rows = songs.len(),
            visit = shown.count,
            "Rendering song list"
        );

        let html = render_song_list(&self.page(lang, artist, &songs, &shown));

        VisitTracker::record(session, &shown, self.clock.now())?;
        Ok(html)
    }

    fn page(&self, lang: &str, artist: Option<&str>, songs: &[Song], visit: &VisitState) -> SongListPage {
        let label = |key: &str| self.bundle.get(key, lang).to_string();

        SongListPage {
            lang: lang.to_string(),
            header: label(keys::HEADER),
            list_label: label(keys::LIST),
            artist: artist.map(str::to_string),
            labels: ColumnLabels {
                title: label(keys::TITLE),
                album: label(keys::ALBUM),
                year: label(keys::YEAR),
                artist: label(keys::ARTIST),
                genre: label(keys::GENRE),
                play: label(keys::PLAY),
            },
            rows: songs
                .iter()
                .map(|song| SongRow {
                    title: song.title.clone(),
                    album: song.album.clone(),
                    year: song.year,
                    artist: song.artist.clone(),
                    genre: song.genre.clone(),
                    audio_url: self.audio.locate(song),
                })
                .collect(),
            visit_date_line: self.bundle.format(keys::VISIT_DATE, lang, &visit.date),
            visit_count_line: self.bundle.format(keys::VISIT_COUNT, lang, visit.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::{models::visit::COUNT_ATTRIBUTE, repository::Repository};

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn listing(songs: Vec<Song>) -> ListingService {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 15, 30)
            .unwrap();
        ListingService::new(
            SongsService::new(Repository::in_memory(songs)),
            Arc::new(ResourceBundle::embedded("en").unwrap()),
            AudioLocator::new("http://localhost:8080/audio/").unwrap(),
            Arc::new(FixedClock(now)),
        )
    }

    fn songs() -> Vec<Song> {
        vec![
            Song::new("Imagine", "Imagine", 1971, "John Lennon", "Rock"),
            Song::new("So What", "Kind of Blue", 1959, "Miles Davis", "Jazz"),
        ]
    }

    #[tokio::test]
    async fn test_first_visit_shows_zero_and_now() {
        let service = listing(songs());
        let mut session = Session::new();

        let html = service.render("en", None, &mut session).await.unwrap();

        assert!(html.contains("<h3>Number of visits: 0</h3>"));
        assert!(html.contains("<h3>Last visit: 05/3/2024 09:15:30</h3>"));
        assert_eq!(session.get::<i64>(COUNT_ATTRIBUTE), Some(1));
    }

    #[tokio::test]
    async fn test_count_shown_lags_stored_count() {
        let service = listing(songs());
        let mut session = Session::new();

        for k in 0..5 {
            let html = service.render("en", None, &mut session).await.unwrap();
            assert!(html.contains(&format!("Number of visits: {}</h3>", k)));
        }
        assert_eq!(session.get::<i64>(COUNT_ATTRIBUTE), Some(5));
    }

    #[tokio::test]
    async fn test_labels_follow_language() {
        let service = listing(songs());
        let mut session = Session::new();

        let html = service.render("fr", None, &mut session).await.unwrap();
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("<th><b>Titre</b></th>"));
        assert!(html.contains("<h3>Nombre de visites : 0</h3>"));
    }

    #[tokio::test]
    async fn test_artist_filter_limits_rows() {
        let service = listing(songs());
        let mut session = Session::new();

        let html = service
            .render("en", Some("Miles Davis"), &mut session)
            .await
            .unwrap();
        assert!(html.contains("<h1>Song list Miles Davis</h1>"));
        assert!(html.contains("<td>So What</td>"));
        assert!(!html.contains("<td>Imagine</td>"));
    }
}
