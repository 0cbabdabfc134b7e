//! HTTP request handlers for the mock server.

pub mod movies;

pub use movies::*;
