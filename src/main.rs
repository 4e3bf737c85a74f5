//! Songlist Server
//!
//! Serves a localized song list with per-session visit tracking.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use songlist_server::{
    config::AppConfig,
    create_router,
    repository::{InMemorySongStore, Repository},
    services::{self, visits::SystemClock, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("songlist_server={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Songlist Server v{}", env!("CARGO_PKG_VERSION"));

    // Seed the song store
    let songs = match &config.songs.seed_file {
        Some(path) if path.exists() => {
            let songs = InMemorySongStore::load_seed_file(path).await?;
            tracing::info!("Loaded {} songs from {}", songs.len(), path.display());
            songs
        }
        Some(path) => {
            tracing::warn!("Seed file {} not found, starting with no songs", path.display());
            Vec::new()
        }
        None => Vec::new(),
    };

    let session_store = services::session_store(&config).await?;
    tracing::info!("Session backend: {:?}", config.session.backend);

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    let services = Services::new(
        Repository::in_memory(songs),
        &config,
        session_store,
        Arc::new(SystemClock),
    )?;

    let mut locales: Vec<_> = services.bundle.locales().collect();
    locales.sort_unstable();
    tracing::info!(
        "Message tables: {} (default {})",
        locales.join(", "),
        services.bundle.default_locale()
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().context("Invalid host address")?,
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
