//! Movie details model and get trait implementation.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::client::TmdbClient;
use crate::error::Result;
use crate::traits::Get;
use crate::transport::Transport;

/// Full details for a single movie.
///
/// Returned by `GET /movie/{id}`. Carries everything a list item has, with
/// resolved genres instead of genre ids, plus production metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    /// TMDb movie id.
    pub id: u64,

    /// Localized title.
    pub title: String,

    #[serde(default)]
    pub original_title: Option<String>,

    #[serde(default)]
    pub original_language: Option<String>,

    #[serde(default)]
    pub overview: Option<String>,

    /// Marketing tagline.
    #[serde(default)]
    pub tagline: Option<String>,

    /// Release status (e.g. "Released", "Post Production").
    #[serde(default)]
    pub status: Option<String>,

    /// Release date as sent by the API (`YYYY-MM-DD`, possibly empty).
    #[serde(default)]
    pub release_date: Option<String>,

    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,

    /// Budget in US dollars (0 when unknown).
    #[serde(default)]
    pub budget: u64,

    /// Revenue in US dollars (0 when unknown).
    #[serde(default)]
    pub revenue: u64,

    #[serde(default)]
    pub imdb_id: Option<String>,

    #[serde(default)]
    pub homepage: Option<String>,

    #[serde(default)]
    pub poster_path: Option<String>,

    #[serde(default)]
    pub backdrop_path: Option<String>,

    #[serde(default)]
    pub genres: Vec<Genre>,

    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,

    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,

    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,

    /// Collection (franchise) this movie belongs to.
    #[serde(default)]
    pub belongs_to_collection: Option<CollectionInfo>,

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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub iso_639_1: String,
    pub name: String,
    #[serde(default)]
    pub english_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

impl MovieDetail {
    /// Parsed release date, if present and well formed.
    pub fn release_date(&self) -> Option<NaiveDate> {
        super::parse_release_date(self.release_date.as_deref())
    }

    /// Release year, if the release date is known.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date().map(|d| d.year())
    }

    /// Genre names, comma separated.
    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Runtime formatted as `2h 16m`.
    pub fn runtime_display(&self) -> Option<String> {
        match self.runtime {
            None | Some(0) => None,
            Some(m) if m < 60 => Some(format!("{m}m")),
            Some(m) => Some(format!("{}h {}m", m / 60, m % 60)),
        }
    }

    /// Full poster URL at the given size (e.g. `w500`).
    pub fn poster_url(&self, size: &str) -> Option<String> {
        self.poster_path.as_deref().map(|p| super::image_url(size, p))
    }

    /// Full backdrop URL at the given size (e.g. `w780`).
    pub fn backdrop_url(&self, size: &str) -> Option<String> {
        self.backdrop_path.as_deref().map(|p| super::image_url(size, p))
    }

    /// IMDb page URL, if the movie has an IMDb id.
    pub fn imdb_url(&self) -> Option<String> {
        self.imdb_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("https://www.imdb.com/title/{id}/"))
    }
}

#[async_trait]
impl Get for MovieDetail {
    type Id = u64; // TMDb movie id

    #[tracing::instrument(skip(client))]
    async fn get<T: Transport>(client: &TmdbClient<T>, id: u64) -> Result<Self> {
        client.fetch_movie_details(id).await
    }
}
