//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, songs};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Songlist API",
        version = "1.0.0",
        description = "Localized song list with per-session visit tracking",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        health::health_check,
        songs::list_songs,
        songs::create_song,
    ),
    components(
        schemas(
            crate::models::song::Song,
            crate::models::song::CreateSong,
            crate::models::song::SongListQuery,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "songs", description = "Song listing and creation")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
