pub mod handlers;

use axum::{routing::get, Json, Router};
use handlers::songs::{
    search_songs_v1, search_songs_v2, ErrorResponse, SongsResponse, __path_search_songs_v1,
    __path_search_songs_v2,
};
use serde::Serialize;
use songhound_application::AppState;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize, utoipa::ToSchema)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "system"
)]
#[allow(dead_code)]
async fn health() -> Json<HealthResponse> {
    health_handler().await
}

#[derive(OpenApi)]
#[openapi(
    paths(health, search_songs_v1, search_songs_v2),
    components(schemas(HealthResponse, SongsResponse, ErrorResponse)),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "songs", description = "Song search by artist")
    ),
    info(
        title = "Songhound API",
        version = "0.1.0",
        description = "Artist song search backed by the Genius API",
    )
)]
struct ApiDoc;

pub fn router(state: AppState) -> Router {
    info!(target: "api", "building router");

    let api_v1 = Router::new().route("/songs/search", get(search_songs_v1));
    let api_v2 = Router::new().route("/songs/search", get(search_songs_v2));

    let openapi = ApiDoc::openapi();

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api_v1)
        .nest("/api/v2", api_v2)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", openapi))
        .with_state(state)
}
