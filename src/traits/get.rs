//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::TmdbClient;
use crate::error::Result;
use crate::transport::Transport;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use tmdbapi::{Get, MovieDetail, TmdbClient};
///
/// let client = TmdbClient::from_env()?;
/// let movie = MovieDetail::get(&client, 603).await?;
/// ```
#[async_trait]
pub trait Get: Sized + Send {
    /// The ID type for this entity.
    type Id: Send;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get<T: Transport>(client: &TmdbClient<T>, id: Self::Id) -> Result<Self>;
}
