//! Mock TMDb API server for E2E testing.
//!
//! An in-memory axum server that serves the popular, search and details
//! endpoints. Unlike wiremock, which mocks at the HTTP level per test, this
//! server keeps a movie catalogue and checks the API key the way TMDb does,
//! enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use tmdbapi::mock_server::MockServer;
//! use tmdbapi::{HttpTransport, StaticCredentials, TmdbClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = TmdbClient::with_base_url(
//!         HttpTransport::new().unwrap(),
//!         &StaticCredentials::new(MockServer::API_KEY),
//!         &server.api_url(),
//!     )
//!     .unwrap();
//!
//!     let movie = client.fetch_movie_details(603).await.unwrap();
//!     assert_eq!(movie.title, "The Matrix");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{MockState, RecordedRequest};
