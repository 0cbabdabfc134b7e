//! Mock server state management.
//!
//! Provides the in-memory catalogue for the mock TMDb API server.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Movie, MovieDetail, Page};

/// Results per page, matching TMDb.
pub const PAGE_SIZE: usize = 20;

/// A request the mock server received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    /// Raw query string, exactly as sent.
    pub query: Option<String>,
}

/// Shared state for the mock server.
///
/// Wrapped in `Arc<RwLock<_>>` for concurrent access by handlers.
#[derive(Debug, Default)]
pub struct MockState {
    /// Movies indexed by TMDb id.
    pub movies: BTreeMap<u64, MovieDetail>,

    /// If set, requests must carry exactly this `api_key`.
    /// Otherwise any non-blank key is accepted.
    pub required_api_key: Option<String>,

    /// Every request received, in order.
    pub requests: Vec<RecordedRequest>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a movie to the catalogue.
    pub fn with_movie(mut self, movie: MovieDetail) -> Self {
        self.movies.insert(movie.id, movie);
        self
    }

    /// Set the required API key.
    pub fn with_required_api_key(mut self, key: &str) -> Self {
        self.required_api_key = Some(key.to_string());
        self
    }

    /// Whether `key` would be accepted.
    pub fn accepts_api_key(&self, key: Option<&str>) -> bool {
        match (key, &self.required_api_key) {
            (Some(k), Some(required)) => k == required,
            (Some(k), None) => !k.trim().is_empty(),
            (None, _) => false,
        }
    }

    /// Get a movie by id.
    pub fn get_movie(&self, id: u64) -> Option<&MovieDetail> {
        self.movies.get(&id)
    }

    /// Page `page` of all movies, most popular first.
    pub fn popular(&self, page: u32) -> Page<Movie> {
        let mut movies: Vec<&MovieDetail> = self.movies.values().collect();
        movies.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
        paginate(&movies, page)
    }

    /// Page `page` of movies whose title contains `query` (case-insensitive).
    pub fn search(&self, query: &str, page: u32) -> Page<Movie> {
        let needle = query.trim().to_lowercase();
        let movies: Vec<&MovieDetail> = self
            .movies
            .values()
            .filter(|m| {
                m.title.to_lowercase().contains(&needle)
                    || m
                        .original_title
                        .as_ref()
                        .map(|t| t.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .collect();
        paginate(&movies, page)
    }
}

fn paginate(movies: &[&MovieDetail], page: u32) -> Page<Movie> {
    let total = movies.len();
    let total_pages = total.div_ceil(PAGE_SIZE) as u32;
    let start = (page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE);

    let results = movies
        .iter()
        .skip(start)
        .take(PAGE_SIZE)
        .map(|m| summary(m))
        .collect();

    Page::new(results, page, total_pages, total as u64)
}

/// The list-item view of a detailed movie.
fn summary(detail: &MovieDetail) -> Movie {
    Movie {
        id: detail.id,
        title: detail.title.clone(),
        original_title: detail.original_title.clone(),
        original_language: detail.original_language.clone(),
        overview: detail.overview.clone(),
        release_date: detail.release_date.clone(),
        poster_path: detail.poster_path.clone(),
        backdrop_path: detail.backdrop_path.clone(),
        genre_ids: detail.genres.iter().map(|g| g.id).collect(),
        popularity: detail.popularity,
        vote_average: detail.vote_average,
        vote_count: detail.vote_count,
        adult: detail.adult,
        video: detail.video,
    }
}
