//! Movie endpoint handlers.
//!
//! Error bodies follow TMDb's `{status_code, status_message, success}` shape.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::mock_server::state::{MockState, RecordedRequest};

/// Highest page TMDb will serve.
const MAX_PAGE: u32 = 500;

/// Query parameters accepted by the movie endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    pub api_key: Option<String>,
    pub page: Option<u32>,
    pub query: Option<String>,
}

fn tmdb_error(status: StatusCode, code: u32, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "status_code": code,
            "status_message": message,
            "success": false
        })),
    )
        .into_response()
}

/// Record the request and check its API key and page.
///
/// Returns the page to serve, or the error response to send.
fn admit(
    state: &mut MockState,
    uri: &Uri,
    query: &MovieQuery,
) -> Result<u32, Response> {
    state.requests.push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
    });

    if !state.accepts_api_key(query.api_key.as_deref()) {
        return Err(tmdb_error(
            StatusCode::UNAUTHORIZED,
            7,
            "Invalid API key: You must be granted a valid key.",
        ));
    }

    let page = query.page.unwrap_or(1);
    if page == 0 || page > MAX_PAGE {
        return Err(tmdb_error(
            StatusCode::BAD_REQUEST,
            22,
            "Invalid page: Pages start at 1 and max at 500. They are expected to be an integer.",
        ));
    }

    Ok(page)
}

/// GET /3/movie/popular
pub async fn popular_movies(
    State(state): State<Arc<RwLock<MockState>>>,
    uri: Uri,
    Query(query): Query<MovieQuery>,
) -> Response {
    let mut state = state.write().await;

    match admit(&mut state, &uri, &query) {
        Ok(page) => (StatusCode::OK, Json(state.popular(page))).into_response(),
        Err(response) => response,
    }
}

/// GET /3/search/movie
pub async fn search_movies(
    State(state): State<Arc<RwLock<MockState>>>,
    uri: Uri,
    Query(query): Query<MovieQuery>,
) -> Response {
    let mut state = state.write().await;

    let page = match admit(&mut state, &uri, &query) {
        Ok(page) => page,
        Err(response) => return response,
    };

    match query.query.as_deref().filter(|q| !q.trim().is_empty()) {
        Some(q) => (StatusCode::OK, Json(state.search(q, page))).into_response(),
        None => tmdb_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            5,
            "Invalid parameters: query must be provided",
        ),
    }
}

/// GET /3/movie/{id}
pub async fn movie_details(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    uri: Uri,
    Query(query): Query<MovieQuery>,
) -> Response {
    let mut state = state.write().await;

    if let Err(response) = admit(&mut state, &uri, &query) {
        return response;
    }

    let movie = id.parse::<u64>().ok().and_then(|id| state.get_movie(id));
    match movie {
        Some(movie) => (StatusCode::OK, Json(movie.clone())).into_response(),
        None => tmdb_error(
            StatusCode::NOT_FOUND,
            34,
            "The resource you requested could not be found.",
        ),
    }
}
