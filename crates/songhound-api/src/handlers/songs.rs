use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use songhound_application::AppState;
use songhound_genius::{GeniusError, Hit};
use tracing::{debug, warn};
use utoipa::{IntoParams, ToSchema};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query string accepted by the v1 search. Other parameters are ignored.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchSongsV1Query {
    /// Artist name to search for.
    pub artist: Option<String>,
    /// Page size sent to Genius (1-50).
    pub per_page: Option<u32>,
}

/// Query string accepted by the v2 search. Other parameters are ignored.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchSongsV2Query {
    /// Artist name to search for.
    pub artist: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SongsResponse {
    /// Raw Genius search hits.
    #[schema(value_type = Vec<Object>)]
    pub songs: Vec<Hit>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Search songs by artist, returning every Genius hit unfiltered
#[utoipa::path(
    get,
    path = "/api/v1/songs/search",
    params(SearchSongsV1Query),
    responses(
        (status = 200, description = "All search hits", body = SongsResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 502, description = "Genius API failure", body = ErrorResponse)
    ),
    tag = "songs"
)]
pub async fn search_songs_v1(
    State(state): State<AppState>,
    query: Result<Query<SearchSongsV1Query>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejected(rejection),
    };
    debug!(target: "api", ?query, "v1 song search");

    let Some(artist) = required_artist(query.artist) else {
        return missing_artist();
    };

    match state.songs.raw_search(&artist, query.per_page).await {
        Ok(songs) => Json(SongsResponse { songs }).into_response(),
        Err(error) => error_response(error),
    }
}

/// Search songs by artist, keeping only hits whose artists match the query
#[utoipa::path(
    get,
    path = "/api/v2/songs/search",
    params(SearchSongsV2Query),
    responses(
        (status = 200, description = "Hits attributed to the artist", body = SongsResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 502, description = "Genius API failure", body = ErrorResponse)
    ),
    tag = "songs"
)]
pub async fn search_songs_v2(
    State(state): State<AppState>,
    query: Result<Query<SearchSongsV2Query>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return query_rejected(rejection),
    };
    debug!(target: "api", ?query, "v2 song search");

    let Some(artist) = required_artist(query.artist) else {
        return missing_artist();
    };

    match state.songs.find_by_artist(&artist).await {
        Ok(songs) => Json(SongsResponse { songs }).into_response(),
        Err(error) => error_response(error),
    }
}

fn required_artist(artist: Option<String>) -> Option<String> {
    artist.filter(|artist| !artist.trim().is_empty())
}

fn missing_artist() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "artist parameter is required".to_string(),
        }),
    )
        .into_response()
}

fn query_rejected(rejection: QueryRejection) -> Response {
    debug!(target: "api", %rejection, "rejected song search query");
    (
        rejection.status(),
        Json(ErrorResponse {
            error: rejection.body_text(),
        }),
    )
        .into_response()
}

pub(crate) fn status_for(error: &GeniusError) -> StatusCode {
    match error {
        GeniusError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        GeniusError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        GeniusError::Transport(_)
        | GeniusError::MalformedBody(_)
        | GeniusError::Provider { .. }
        | GeniusError::PaginationLimitExceeded { .. } => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(error: GeniusError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        warn!(target: "api", %error, "song search failed");
    }

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_artist_is_missing() {
        assert_eq!(required_artist(None), None);
        assert_eq!(required_artist(Some("  ".to_string())), None);
        assert_eq!(
            required_artist(Some("Adele".to_string())),
            Some("Adele".to_string())
        );
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            status_for(&GeniusError::InvalidQuery("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&GeniusError::Configuration("missing".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&GeniusError::Provider {
                status: 401,
                message: "nope".to_string()
            }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&GeniusError::PaginationLimitExceeded { max_pages: 3 }),
            StatusCode::BAD_GATEWAY
        );
    }
}
