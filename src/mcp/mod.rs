//! MCP (Model Context Protocol) server and tool types.
//!
//! This module provides an MCP server for the TMDb API, allowing AI
//! assistants to list popular movies, search by title, and fetch details.
//!
//! # Example
//!
//! ```no_run
//! use tmdbapi::mcp::TmdbServer;
//!
//! # fn main() -> tmdbapi::Result<()> {
//! let server = TmdbServer::from_env()?;
//! // Server can now be used with rmcp transport
//! # Ok(())
//! # }
//! ```

mod params;
mod server;

pub use params::*;
pub use server::TmdbServer;
