//! Business logic services

pub mod audio;
pub mod i18n;
pub mod lang;
pub mod listing;
pub mod sessions;
pub mod songs;
pub mod visits;

use std::{sync::Arc, time::Duration};

use crate::{
    config::{AppConfig, SessionBackend},
    error::AppResult,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub songs: songs::SongsService,
    pub listing: listing::ListingService,
    pub sessions: sessions::SessionsService,
    pub bundle: Arc<i18n::ResourceBundle>,
}

impl Services {
    /// Create all services with the given repository and session store
    pub fn new(
        repository: Repository,
        config: &AppConfig,
        session_store: Arc<dyn sessions::SessionStore>,
        clock: Arc<dyn visits::Clock>,
    ) -> AppResult<Self> {
        let bundle = Arc::new(i18n::ResourceBundle::embedded(&config.i18n.default_lang)?);
        let audio = audio::AudioLocator::new(&config.audio.base_url)?;
        let songs = songs::SongsService::new(repository);

        Ok(Self {
            listing: listing::ListingService::new(songs.clone(), bundle.clone(), audio, clock),
            songs,
            sessions: sessions::SessionsService::new(session_store),
            bundle,
        })
    }
}

/// Build the session store selected by the configuration
pub async fn session_store(config: &AppConfig) -> AppResult<Arc<dyn sessions::SessionStore>> {
    let session = &config.session;
    Ok(match session.backend {
        SessionBackend::Memory => Arc::new(sessions::MemorySessionStore::new(Duration::from_secs(
            session.ttl_seconds,
        ))),
        SessionBackend::Redis => Arc::new(
            sessions::RedisSessionStore::new(&session.redis_url, session.ttl_seconds).await?,
        ),
    })
}
