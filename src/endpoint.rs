//! Endpoint descriptors.

/// One logical remote operation: a path under the API base URL plus
/// ordered query parameters.
///
/// The API key is not part of the descriptor; the client prepends it when
/// building the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// Create a descriptor for `path` with no query parameters.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter. Order is preserved.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// `GET /movie/popular?page=N`
    pub fn popular(page: u32) -> Self {
        Self::new("/movie/popular").param("page", page)
    }

    /// `GET /search/movie?query=Q&page=N`
    pub fn search(query: &str, page: u32) -> Self {
        Self::new("/search/movie")
            .param("query", query)
            .param("page", page)
    }

    /// `GET /movie/{id}`
    pub fn movie_details(id: u64) -> Self {
        Self::new(format!("/movie/{id}"))
    }

    /// Path relative to the API base, e.g. `/movie/popular`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in the order they were added.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}
