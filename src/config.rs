//! Credential sources.
//!
//! The client reads its API key exactly once, at construction, from a
//! [`CredentialSource`]. Sources never fail: a key that cannot be found is
//! reported as `None` and the client refuses to build request URLs later.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable holding the TMDb API key.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "TMDB_API_URL";

/// A configuration provider that may supply the TMDb API key.
pub trait CredentialSource {
    /// Returns the API key, or `None` if it is not configured.
    ///
    /// Implementations should treat blank values as absent.
    fn api_key(&self) -> Option<String>;
}

/// Reads the API key from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    /// Read from a custom variable instead of `TMDB_API_KEY`.
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::with_var(API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        env::var(&self.var).ok().and_then(non_blank)
    }
}

/// Reads the API key from a JSON config file of the form `{"APIKey": "..."}`.
#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "APIKey", default)]
    api_key: Option<String>,
}

impl FileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialSource for FileCredentials {
    fn api_key(&self) -> Option<String> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Cannot read TMDb config file");
                return None;
            }
        };

        match serde_json::from_str::<ConfigFile>(&contents) {
            Ok(config) => {
                let key = config.api_key.and_then(non_blank);
                if key.is_none() {
                    tracing::warn!(
                        path = %self.path.display(),
                        "TMDb config file has no 'APIKey' string"
                    );
                }
                key
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Malformed TMDb config file");
                None
            }
        }
    }
}

/// A fixed API key, for tests and embedding.
#[derive(Clone)]
pub struct StaticCredentials(String);

impl StaticCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StaticCredentials").finish_non_exhaustive()
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        non_blank(self.0.clone())
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
