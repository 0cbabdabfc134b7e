//! List trait for fetching pages of entities.

use async_trait::async_trait;

use crate::client::TmdbClient;
use crate::error::Result;
use crate::pagination::Page;
use crate::transport::Transport;

/// Fetch one page of entities selected by a query.
///
/// Only single pages are fetched; walking every page is left to the caller.
///
/// # Example
///
/// ```ignore
/// use tmdbapi::{List, Movie, MovieListQuery, TmdbClient};
///
/// let client = TmdbClient::from_env()?;
/// let popular = Movie::list_page(&client, &MovieListQuery::Popular, 1).await?;
/// let search = Movie::list_page(&client, &MovieListQuery::Search("heat".into()), 1).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Selects which list to fetch.
    type Query: Default + Send + Sync;

    /// Fetch page `page` (1-indexed) of the list selected by `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or fails.
    async fn list_page<T: Transport>(
        client: &TmdbClient<T>,
        query: &Self::Query,
        page: u32,
    ) -> Result<Page<Self>>;
}
