//! Song list endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{
    error::AppResult,
    models::song::{CreateSong, SongListQuery},
    services::lang::resolve_lang,
    AppState,
};

use super::{session_cookie, SessionContext};

/// Localized song list, optionally filtered by artist
#[utoipa::path(
    get,
    path = "/songs",
    tag = "songs",
    params(SongListQuery),
    responses(
        (status = 200, description = "Song list page; sets the `lang` cookie", body = String, content_type = "text/html")
    )
)]
pub async fn list_songs(
    State(state): State<AppState>,
    jar: CookieJar,
    SessionContext(mut session): SessionContext,
    Query(query): Query<SongListQuery>,
) -> AppResult<(CookieJar, Html<String>)> {
    let i18n = &state.config.i18n;
    let lang = resolve_lang(
        query.lang.as_deref(),
        jar.get(&i18n.cookie_name).map(|cookie| cookie.value()),
        &i18n.default_lang,
    );

    // Rewritten on every response, even when it came from the cookie
    let mut jar = jar.add(Cookie::build((i18n.cookie_name.clone(), lang.clone())).path("/"));

    let html = state
        .services
        .listing
        .render(&lang, query.artist.as_deref(), &mut session)
        .await?;

    state.services.sessions.save(&session).await?;
    if session.is_new() {
        jar = jar.add(session_cookie(&state.config.session, &session));
    }

    Ok((jar, Html(html)))
}

/// Add a song from a form submission
#[utoipa::path(
    post,
    path = "/songs",
    tag = "songs",
    request_body(content = CreateSong, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Song added"),
        (status = 400, description = "Year is not an integer", body = crate::error::ErrorResponse),
        (status = 422, description = "A form field is missing")
    )
)]
pub async fn create_song(
    State(state): State<AppState>,
    Form(data): Form<CreateSong>,
) -> AppResult<StatusCode> {
    state.services.songs.create(data).await?;
    Ok(StatusCode::OK)
}
