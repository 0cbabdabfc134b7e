//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the tmdbapi binary.

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::client::DEFAULT_PAGE;

/// TMDb API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "tmdbapi", about = "The Movie Database API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log request details to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Maximum log level for the stderr subscriber.
    ///
    /// Only errors are logged unless `--verbose` is set.
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::ERROR
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List currently popular movies.
    Popular {
        /// Page number (1-indexed).
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
    },

    /// Search movies by title.
    Search {
        /// Search text.
        query: String,

        /// Page number (1-indexed).
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
    },

    /// Show full details for one movie.
    #[command(alias = "get")]
    Details {
        /// TMDb movie id.
        id: u64,
    },
}
