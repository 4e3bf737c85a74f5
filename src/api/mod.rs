//! HTTP handlers and routing

pub mod health;
pub mod openapi;
pub mod songs;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::{config::SessionConfig, error::AppError, services::sessions::Session, AppState};

/// Extractor for the caller's session, keyed by the session cookie.
///
/// A missing, malformed, unknown or expired cookie yields a new session.
pub struct SessionContext(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for SessionContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let id = jar
            .get(&state.config.session.cookie_name)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

        let session = state.services.sessions.open(id).await?;
        Ok(SessionContext(session))
    }
}

/// Cookie carrying the session id back to the client
pub fn session_cookie(config: &SessionConfig, session: &Session) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), session.id().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health::health_check))
        .route("/songs", get(songs::list_songs).post(songs::create_song))
        .with_state(state);

    Router::new()
        .merge(app)
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
