//! Movie list item and list trait implementation.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::client::TmdbClient;
use crate::error::Result;
use crate::pagination::Page;
use crate::traits::List;
use crate::transport::Transport;

/// A movie as it appears in list and search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// TMDb movie id.
    pub id: u64,

    /// Localized title.
    pub title: String,

    /// Title in the original language.
    #[serde(default)]
    pub original_title: Option<String>,

    /// ISO 639-1 code of the original language.
    #[serde(default)]
    pub original_language: Option<String>,

    /// Plot summary.
    #[serde(default)]
    pub overview: Option<String>,

    /// Release date as sent by the API (`YYYY-MM-DD`, possibly empty).
    #[serde(default)]
    pub release_date: Option<String>,

    /// Poster image path, relative to the image CDN.
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Backdrop image path, relative to the image CDN.
    #[serde(default)]
    pub backdrop_path: Option<String>,

    /// Genre ids; names come from the genre list endpoint.
    #[serde(default)]
    pub genre_ids: Vec<u32>,

    #[serde(default)]
    pub popularity: f64,

    #[serde(default)]
    pub vote_average: f64,

    #[serde(default)]
    pub vote_count: u64,

    #[serde(default)]
    pub adult: bool,

    #[serde(default)]
    pub video: bool,
}

/// A page of movies, as returned by the popular and search endpoints.
pub type MoviePage = Page<Movie>;

impl Movie {
    /// Parsed release date, if present and well formed.
    pub fn release_date(&self) -> Option<NaiveDate> {
        super::parse_release_date(self.release_date.as_deref())
    }

    /// Release year, if the release date is known.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date().map(|d| d.year())
    }

    /// Full poster URL at the given size (e.g. `w500`).
    pub fn poster_url(&self, size: &str) -> Option<String> {
        self.poster_path.as_deref().map(|p| super::image_url(size, p))
    }

    /// Full backdrop URL at the given size (e.g. `w780`).
    pub fn backdrop_url(&self, size: &str) -> Option<String> {
        self.backdrop_path.as_deref().map(|p| super::image_url(size, p))
    }
}

/// Which movie list to fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MovieListQuery {
    /// Currently popular movies.
    #[default]
    Popular,
    /// Title search.
    Search(String),
}

#[async_trait]
impl List for Movie {
    type Query = MovieListQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page<T: Transport>(
        client: &TmdbClient<T>,
        query: &Self::Query,
        page: u32,
    ) -> Result<Page<Self>> {
        match query {
            MovieListQuery::Popular => client.fetch_popular_movies(page).await,
            MovieListQuery::Search(q) => client.search_movies(q, page).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserializes_list_item() {
        let movie: Movie = serde_json::from_value(serde_json::json!({
            "adult": false,
            "backdrop_path": "/fNG7i7RqMErkcqhohV2a6cV1Ehy.jpg",
            "genre_ids": [28, 878],
            "id": 603,
            "original_language": "en",
            "original_title": "The Matrix",
            "overview": "Set in the 22nd century...",
            "popularity": 92.5,
            "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
            "release_date": "1999-03-30",
            "title": "The Matrix",
            "video": false,
            "vote_average": 8.2,
            "vote_count": 24000
        }))
        .unwrap();

        assert_eq!(movie.id, 603);
        assert_eq!(movie.genre_ids, vec![28, 878]);
        assert_eq!(movie.release_year(), Some(1999));
        assert_eq!(
            movie.poster_url("w185").as_deref(),
            Some("https://image.tmdb.org/t/p/w185/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg")
        );
    }

    #[test]
    fn test_movie_tolerates_missing_and_null_fields() {
        let movie: Movie = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Untitled",
            "poster_path": null,
            "release_date": ""
        }))
        .unwrap();

        assert!(movie.poster_url("w500").is_none());
        assert!(movie.release_date().is_none());
        assert_eq!(movie.vote_count, 0);
    }
}
