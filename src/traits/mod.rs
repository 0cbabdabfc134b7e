//! Trait definitions for TMDb operations.
//!
//! Each model type implements the traits its endpoints support, so callers
//! can write `MovieDetail::get(&client, 603)` instead of picking a client
//! method by hand.

mod get;
mod list;

pub use get::Get;
pub use list::List;
