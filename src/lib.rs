//! TMDb API client library.
//!
//! A Rust library for The Movie Database (TMDb) v3 REST API. The client
//! builds authenticated request URLs and delegates the HTTP round trip and
//! JSON decoding to a pluggable [`Transport`].
//!
//! # Quick Start
//!
//! ```no_run
//! use tmdbapi::{Get, MovieDetail, TmdbClient};
//!
//! #[tokio::main]
//! async fn main() -> tmdbapi::Result<()> {
//!     // Create client from environment variables
//!     let client = TmdbClient::from_env()?;
//!
//!     // First page of popular movies
//!     let popular = client.fetch_popular_movies(1).await?;
//!     println!("Page 1 of {}", popular.total_pages);
//!
//!     // Search by title
//!     let results = client.search_movies("blade runner", 1).await?;
//!     for movie in &results {
//!         println!("{} ({:?})", movie.title, movie.release_year());
//!     }
//!
//!     // Full details, via the client or the Get trait
//!     let matrix = MovieDetail::get(&client, 603).await?;
//!     println!("{}: {}", matrix.title, matrix.genre_names());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! The API key is read once, when the client is built, from a
//! [`CredentialSource`]:
//!
//! - [`EnvCredentials`] - `TMDB_API_KEY` (used by [`TmdbClient::from_env`])
//! - [`FileCredentials`] - a JSON file with an `"APIKey"` field
//! - [`StaticCredentials`] - a fixed string
//!
//! `TMDB_API_URL` optionally overrides the base URL
//! (defaults to `https://api.themoviedb.org/3`).
//!
//! A missing key does not stop the client from being built, but every
//! request then fails with [`TmdbError::InvalidRequest`] without touching
//! the network.

mod client;
mod config;
mod endpoint;
mod error;
mod models;
mod output;
mod pagination;
mod traits;
mod transport;

pub mod cli;
pub mod mcp;
#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{TmdbClient, DEFAULT_API_URL, DEFAULT_PAGE};
pub use config::{
    CredentialSource, EnvCredentials, FileCredentials, StaticCredentials, API_KEY_ENV,
    API_URL_ENV,
};
pub use endpoint::Endpoint;
pub use error::{Result, TmdbError};
pub use output::PrettyPrint;
pub use pagination::Page;
pub use transport::{HttpTransport, Transport};

// Re-export traits
pub use traits::{Get, List};

// Re-export models
pub use models::{
    image_url, CollectionInfo, Genre, Movie, MovieDetail, MovieListQuery, MoviePage,
    ProductionCompany, ProductionCountry, SpokenLanguage, IMAGE_BASE_URL,
};
