//! TMDb API client.
//!
//! Builds authenticated request URLs and hands them to a [`Transport`].
//! Entity-level access is also available via the `Get` and `List` traits on
//! the model types.

use std::env;
use std::sync::Arc;

use url::Url;

use crate::config::{CredentialSource, EnvCredentials, API_URL_ENV};
use crate::endpoint::Endpoint;
use crate::error::{Result, TmdbError};
use crate::models::{MovieDetail, MoviePage};
use crate::transport::{HttpTransport, Transport};

/// Base URL of the TMDb v3 API.
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";

/// Page requested when the caller does not pick one.
pub const DEFAULT_PAGE: u32 = 1;

const API_KEY_PARAM: &str = "api_key";

/// TMDb API client.
///
/// Holds the injected transport and the API key captured at construction.
/// Nothing is mutated after that, so a client can be shared freely between
/// tasks.
///
/// # Example
///
/// ```no_run
/// use tmdbapi::{HttpTransport, StaticCredentials, TmdbClient};
///
/// # async fn example() -> tmdbapi::Result<()> {
/// // Create from environment variables
/// let client = TmdbClient::from_env()?;
///
/// // Or configure manually
/// let client = TmdbClient::new(HttpTransport::new()?, &StaticCredentials::new("your-api-key"))?;
/// let page = client.fetch_popular_movies(1).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TmdbClient<T = HttpTransport> {
    transport: T,
    base_url: Arc<Url>,
    api_key: Arc<str>,
}

impl<T> std::fmt::Debug for TmdbClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_credential", &self.has_credential())
            .finish_non_exhaustive()
    }
}

impl TmdbClient<HttpTransport> {
    /// Create a client from environment variables.
    ///
    /// Uses `TMDB_API_KEY` for authentication and optionally `TMDB_API_URL`
    /// for the base URL (defaults to `https://api.themoviedb.org/3`).
    /// A missing key is not an error here; requests fail later with
    /// [`TmdbError::InvalidRequest`].
    ///
    /// # Errors
    ///
    /// Returns an error if `TMDB_API_URL` is invalid or the HTTP client
    /// cannot be built.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(HttpTransport::new()?, &EnvCredentials::default(), &base_url)
    }
}

impl<T> TmdbClient<T> {
    /// Create a client against the public TMDb API.
    ///
    /// The credential source is read exactly once.
    pub fn new(transport: T, credentials: &impl CredentialSource) -> Result<Self> {
        Self::with_base_url(transport, credentials, DEFAULT_API_URL)
    }

    /// Create a client against a custom base URL (e.g. a mock server).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(
        transport: T,
        credentials: &impl CredentialSource,
        base_url: &str,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;

        let api_key = credentials.api_key().unwrap_or_else(|| {
            tracing::warn!(
                "TMDb API key not configured; requests will fail until TMDB_API_KEY or a config file provides one"
            );
            String::new()
        });

        Ok(Self {
            transport,
            base_url: Arc::new(base_url),
            api_key: api_key.into(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a non-blank API key was configured.
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request URL for `endpoint`.
    ///
    /// The query string always starts with `api_key`, followed by the
    /// endpoint's parameters in order.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::InvalidRequest`] if no API key is configured, or
    /// the base URL carries a query or fragment, or cannot take path segments.
    pub fn build_url(&self, endpoint: &Endpoint) -> Result<Url> {
        if !self.has_credential() {
            tracing::error!(
                path = endpoint.path(),
                "Missing TMDb API key; refusing to build request URL"
            );
            return Err(TmdbError::InvalidRequest(
                "TMDb API key is not configured".to_string(),
            ));
        }

        let base = &*self.base_url;
        if base.query().is_some() || base.fragment().is_some() {
            return Err(TmdbError::InvalidRequest(format!(
                "invalid base URL '{base}': must not carry a query or fragment"
            )));
        }

        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                TmdbError::InvalidRequest(format!(
                    "invalid base URL '{base}': not a hierarchical URL"
                ))
            })?
            .pop_if_empty()
            .extend(endpoint.path().split('/').filter(|s| !s.is_empty()));

        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(API_KEY_PARAM, &self.api_key);
            for (name, value) in endpoint.query() {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

impl<T: Transport> TmdbClient<T> {
    /// Fetch one page of currently popular movies.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::InvalidRequest`] if the URL cannot be built, or
    /// whatever error the transport reports.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_popular_movies(&self, page: u32) -> Result<MoviePage> {
        self.fetch(&Endpoint::popular(page)).await
    }

    /// Search movies by title.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::InvalidRequest`] if `query` is blank or the URL
    /// cannot be built, or whatever error the transport reports.
    #[tracing::instrument(skip(self))]
    pub async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage> {
        if query.trim().is_empty() {
            return Err(TmdbError::InvalidRequest(
                "search query must not be blank".to_string(),
            ));
        }
        self.fetch(&Endpoint::search(query, page)).await
    }

    /// Fetch full details for one movie.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::InvalidRequest`] if the URL cannot be built, or
    /// whatever error the transport reports (an unknown id surfaces as a
    /// 404 [`TmdbError::ApiError`]).
    #[tracing::instrument(skip(self))]
    pub async fn fetch_movie_details(&self, id: u64) -> Result<MovieDetail> {
        self.fetch(&Endpoint::movie_details(id)).await
    }

    async fn fetch<R>(&self, endpoint: &Endpoint) -> Result<R>
    where
        R: serde::de::DeserializeOwned + Send,
    {
        let url = self.build_url(endpoint)?;
        tracing::debug!(url = %redacted(&url), "Sending TMDb request");
        self.transport.fetch(url).await
    }
}

/// Render `url` with the API key masked, for logs.
fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    masked.set_query(None);
    masked.query_pairs_mut().extend_pairs(pairs);
    masked.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticCredentials;
    use async_trait::async_trait;
    use serde::de::DeserializeOwned;
    use std::sync::Mutex;

    /// Records every URL it is asked to fetch and decodes a canned body.
    struct RecordingTransport {
        calls: Mutex<Vec<Url>>,
        body: serde_json::Value,
    }

    impl RecordingTransport {
        fn returning(body: serde_json::Value) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                body,
            }
        }

        fn calls(&self) -> Vec<Url> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn fetch<T>(&self, url: Url) -> Result<T>
        where
            T: DeserializeOwned + Send,
        {
            self.calls.lock().unwrap().push(url);
            Ok(serde_json::from_value(self.body.clone())?)
        }
    }

    fn empty_page() -> serde_json::Value {
        serde_json::json!({
            "page": 1,
            "results": [],
            "total_pages": 0,
            "total_results": 0
        })
    }

    fn client_with(key: &str, body: serde_json::Value) -> TmdbClient<RecordingTransport> {
        TmdbClient::new(
            RecordingTransport::returning(body),
            &StaticCredentials::new(key),
        )
        .unwrap()
    }

    #[test]
    fn test_client_debug() {
        let client = client_with("test-token", empty_page());
        let debug = format!("{:?}", client);
        assert!(debug.contains("TmdbClient"));
        assert!(debug.contains("base_url"));
        // Token should not be in debug output
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_api_key_is_first_and_unique() {
        let client = client_with("k3y", empty_page());
        let endpoints = [
            Endpoint::popular(1),
            Endpoint::search("api_key=evil", 4),
            Endpoint::movie_details(603),
            Endpoint::new("/genre/movie/list").param("language", "en-US"),
        ];

        for endpoint in &endpoints {
            let url = client.build_url(endpoint).unwrap();
            let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
            assert_eq!(pairs[0], ("api_key".to_string(), "k3y".to_string()));
            assert_eq!(pairs.iter().filter(|(k, _)| k == "api_key").count(), 1);
            assert_eq!(&pairs[1..], endpoint.query());
        }
    }

    #[test]
    fn test_build_url_joins_base_path() {
        let client = client_with("abc", empty_page());
        let url = client.build_url(&Endpoint::popular(2)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/movie/popular?api_key=abc&page=2"
        );
    }

    #[test]
    fn test_build_url_tolerates_trailing_slash_and_bare_path() {
        let client = TmdbClient::with_base_url(
            RecordingTransport::returning(empty_page()),
            &StaticCredentials::new("abc"),
            "http://localhost:8080/3/",
        )
        .unwrap();

        let url = client.build_url(&Endpoint::new("movie/7")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/3/movie/7?api_key=abc");
    }

    #[test]
    fn test_build_url_rejects_blank_credential() {
        for key in ["", "   ", "\n\t"] {
            let client = client_with(key, empty_page());
            assert!(!client.has_credential());
            let err = client.build_url(&Endpoint::popular(1)).unwrap_err();
            assert!(matches!(err, TmdbError::InvalidRequest(_)));
        }
    }

    #[test]
    fn test_build_url_rejects_non_hierarchical_base() {
        let client = TmdbClient::with_base_url(
            RecordingTransport::returning(empty_page()),
            &StaticCredentials::new("abc"),
            "mailto:movies@example.com",
        )
        .unwrap();

        let err = client.build_url(&Endpoint::popular(1)).unwrap_err();
        assert!(matches!(err, TmdbError::InvalidRequest(_)));
    }

    #[test]
    fn test_build_url_rejects_base_with_query_or_fragment() {
        for base in ["http://localhost:8080/3?language=en", "http://localhost:8080/3#x"] {
            let client = TmdbClient::with_base_url(
                RecordingTransport::returning(empty_page()),
                &StaticCredentials::new("abc"),
                base,
            )
            .unwrap();

            let err = client.build_url(&Endpoint::popular(2)).unwrap_err();
            assert!(matches!(err, TmdbError::InvalidRequest(_)), "{base}");
        }
    }

    #[tokio::test]
    async fn test_base_with_query_issues_no_call() {
        let client = TmdbClient::with_base_url(
            RecordingTransport::returning(empty_page()),
            &StaticCredentials::new("abc"),
            "http://localhost:8080/3?language=en",
        )
        .unwrap();

        assert!(matches!(
            client.fetch_popular_movies(1).await,
            Err(TmdbError::InvalidRequest(_))
        ));
        assert!(client.transport().calls().is_empty());
    }

    #[test]
    fn test_build_url_on_bare_host() {
        let client = TmdbClient::with_base_url(
            RecordingTransport::returning(empty_page()),
            &StaticCredentials::new("abc"),
            "http://127.0.0.1:9000",
        )
        .unwrap();

        let url = client.build_url(&Endpoint::movie_details(42)).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/movie/42?api_key=abc");
    }

    #[test]
    fn test_invalid_base_url_fails_construction() {
        let result = TmdbClient::with_base_url(
            RecordingTransport::returning(empty_page()),
            &StaticCredentials::new("abc"),
            "not a url",
        );
        assert!(matches!(result, Err(TmdbError::UrlError(_))));
    }

    #[test]
    fn test_redacted_masks_api_key() {
        let client = client_with("super-secret", empty_page());
        let url = client.build_url(&Endpoint::search("heat", 1)).unwrap();
        let masked = redacted(&url);
        assert!(!masked.contains("super-secret"));
        assert!(masked.contains("query=heat"));
    }

    #[tokio::test]
    async fn test_popular_page_two() {
        let client = client_with("abc", empty_page());
        client.fetch_popular_movies(2).await.unwrap();

        let calls = client.transport().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path(), "/3/movie/popular");
        assert_eq!(calls[0].query(), Some("api_key=abc&page=2"));
    }

    #[tokio::test]
    async fn test_search_sends_query_then_page() {
        let client = client_with("abc", empty_page());
        client.search_movies("the matrix", 3).await.unwrap();

        let calls = client.transport().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path(), "/3/search/movie");
        let pairs: Vec<(String, String)> = calls[0].query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("api_key".to_string(), "abc".to_string()),
                ("query".to_string(), "the matrix".to_string()),
                ("page".to_string(), "3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_movie_details_42() {
        let client = client_with(
            "abc",
            serde_json::json!({"id": 42, "title": "Answer"}),
        );
        let detail = client.fetch_movie_details(42).await.unwrap();
        assert_eq!(detail.id, 42);

        let calls = client.transport().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path(), "/3/movie/42");
        assert_eq!(calls[0].query(), Some("api_key=abc"));
    }

    #[tokio::test]
    async fn test_blank_search_issues_no_call() {
        let client = client_with("abc", empty_page());
        for query in ["", " ", "\t\n  "] {
            let err = client.search_movies(query, 1).await.unwrap_err();
            assert!(matches!(err, TmdbError::InvalidRequest(_)));
        }
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_credential_issues_no_call() {
        let client = client_with("", empty_page());

        assert!(matches!(
            client.fetch_popular_movies(1).await,
            Err(TmdbError::InvalidRequest(_))
        ));
        assert!(matches!(
            client.search_movies("alien", 1).await,
            Err(TmdbError::InvalidRequest(_))
        ));
        assert!(matches!(
            client.fetch_movie_details(348).await,
            Err(TmdbError::InvalidRequest(_))
        ));
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_decode_error_propagates_without_retry() {
        let client = client_with("abc", serde_json::json!({"unexpected": true}));

        let err = client.fetch_movie_details(1).await.unwrap_err();
        assert!(matches!(err, TmdbError::ParseError(_)));
        assert_eq!(client.transport().calls().len(), 1);
    }
}
