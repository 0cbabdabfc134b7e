//! TMDb API CLI binary.
//!
//! A command-line interface for browsing The Movie Database.

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tabled::{Table, Tabled};
use tmdbapi::cli::{Cli, Command};
use tmdbapi::{Movie, MovieDetail, MoviePage, PrettyPrint, TmdbClient, TmdbError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .init();

    let client = match TmdbClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if !client.has_credential() {
        eprintln!("Error: TMDb API key is not configured");
        eprintln!("Hint: Set TMDB_API_KEY environment variable");
        return ExitCode::FAILURE;
    }

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &TmdbClient, cli: Cli) -> tmdbapi::Result<()> {
    match cli.command {
        Command::Popular { page } => {
            let movies = client.fetch_popular_movies(page).await?;
            output_page(&movies, cli.json)
        }
        Command::Search { query, page } => {
            let movies = client.search_movies(&query, page).await?;
            output_page(&movies, cli.json)
        }
        Command::Details { id } => {
            let movie = client.fetch_movie_details(id).await?;
            output_single(&movie, cli.json)
        }
    }
}

fn output_single(item: &MovieDetail, json: bool) -> tmdbapi::Result<()> {
    if json {
        print_json(item)
    } else {
        println!("{}", item.pretty_print());
        Ok(())
    }
}

fn output_page(page: &MoviePage, json: bool) -> tmdbapi::Result<()> {
    if json {
        return print_json(page);
    }

    if page.is_empty() {
        println!("No movies found.");
    } else {
        let rows: Vec<MovieRow> = page.iter().map(MovieRow::from).collect();
        println!("{}", Table::new(rows));
    }

    println!(
        "\nPage {}/{} ({} total results)",
        page.page, page.total_pages, page.total_results
    );
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> tmdbapi::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(TmdbError::ParseError)?
    );
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct MovieRow {
    id: u64,
    title: String,
    year: String,
    rating: String,
}

impl From<&Movie> for MovieRow {
    fn from(m: &Movie) -> Self {
        Self {
            id: m.id,
            title: m.title.clone(),
            year: m.release_year().map(|y| y.to_string()).unwrap_or_default(),
            rating: format!("{:.1}", m.vote_average),
        }
    }
}
