//! HTTP transport.
//!
//! The client never talks to the network itself. It hands a fully built
//! URL to a [`Transport`], which performs the GET and decodes the body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Result, TmdbError};

const USER_AGENT: &str = concat!("tmdbapi/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs one HTTP GET and decodes the JSON response.
///
/// Implementations must not retry. Errors are returned to the caller of the
/// client unchanged, so a test double can inject any [`TmdbError`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and decode the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, or when the
    /// body does not decode into `T`.
    async fn fetch<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned + Send;
}

/// [`Transport`] backed by a shared reqwest connection pool.
///
/// Cheaply cloneable; clones share the pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Create a transport with the default user agent, compression and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TmdbError::HttpError)?;

        Ok(Self { http })
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(TmdbError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let message = Self::extract_error_message(response, status).await;
        Err(TmdbError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    ///
    /// TMDb reports failures as `{"status_code": 7, "status_message": "..."}`.
    async fn extract_error_message(response: Response, status: StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            for field in ["status_message", "message", "error"] {
                if let Some(msg) = json.get(field).and_then(|m| m.as_str()) {
                    return msg.to_string();
                }
            }
        }

        if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip_all, fields(path = url.path()))]
    async fn fetch<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(TmdbError::HttpError)?;

        let response = Self::check_response(response).await?;
        let body = response.bytes().await.map_err(TmdbError::HttpError)?;

        Ok(serde_json::from_slice(&body)?)
    }
}
