//! Mock TMDb API server.
//!
//! Provides an axum-based HTTP server that simulates the TMDb v3 API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;
use super::handlers;
use super::state::MockState;

/// A mock TMDb API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// API key accepted by servers created with [`MockServer::start`].
    pub const API_KEY: &'static str = "mock-api-key";

    /// Start a new mock server with default fixtures.
    ///
    /// Only [`MockServer::API_KEY`] is accepted. The server listens on a
    /// random available port and returns immediately.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with an empty catalogue that accepts any key.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the root URL of the mock server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the API base URL (root plus the `/3` version prefix).
    ///
    /// Use this URL when creating a `TmdbClient` for testing.
    pub fn api_url(&self) -> String {
        format!("{}/3", self.url)
    }

    /// Get access to the server's shared state.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        Fixtures::default_scenario()
            .into_iter()
            .fold(MockState::new(), MockState::with_movie)
            .with_required_api_key(Self::API_KEY)
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            .route("/3/movie/popular", get(handlers::popular_movies))
            .route("/3/movie/:id", get(handlers::movie_details))
            .route("/3/search/movie", get(handlers::search_movies))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HttpTransport, StaticCredentials, TmdbClient};

    fn client_for(server: &MockServer, key: &str) -> TmdbClient {
        TmdbClient::with_base_url(
            HttpTransport::new().unwrap(),
            &StaticCredentials::new(key),
            &server.api_url(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_movie_with_client() {
        let server = MockServer::start().await;
        let client = client_for(&server, MockServer::API_KEY);

        let movie = client
            .fetch_movie_details(603)
            .await
            .expect("Failed to get movie");

        assert_eq!(movie.title, "The Matrix");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_wrong_key_is_rejected() {
        let server = MockServer::start().await;
        let client = client_for(&server, "wrong-key");

        let err = client.fetch_popular_movies(1).await.unwrap_err();
        assert!(matches!(
            err,
            crate::TmdbError::ApiError {
                status_code: Some(401),
                ..
            }
        ));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = client_for(&server, "any-key");

        let page = client.fetch_popular_movies(1).await.unwrap();
        assert!(page.is_empty());

        let result = client.fetch_movie_details(1).await;
        assert!(result.unwrap_err().is_not_found());

        server.shutdown().await;
    }
}
