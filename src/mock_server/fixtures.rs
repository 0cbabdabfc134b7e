//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{Genre, MovieDetail};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a movie with required fields only.
    pub fn minimal_movie(id: u64, title: &str) -> MovieDetail {
        MovieDetail {
            id,
            title: title.to_string(),
            original_title: Some(title.to_string()),
            original_language: Some("en".to_string()),
            overview: None,
            tagline: None,
            status: None,
            release_date: None,
            runtime: None,
            budget: 0,
            revenue: 0,
            imdb_id: None,
            homepage: None,
            poster_path: None,
            backdrop_path: None,
            genres: vec![],
            production_companies: vec![],
            production_countries: vec![],
            spoken_languages: vec![],
            belongs_to_collection: None,
            popularity: 0.0,
            vote_average: 0.0,
            vote_count: 0,
            adult: false,
            video: false,
        }
    }

    /// Create a released movie with a date and popularity score.
    pub fn movie(id: u64, title: &str, release_date: &str, popularity: f64) -> MovieDetail {
        let mut movie = Self::minimal_movie(id, title);
        movie.release_date = Some(release_date.to_string());
        movie.status = Some("Released".to_string());
        movie.popularity = popularity;
        movie
    }

    /// A fully populated movie.
    pub fn the_matrix() -> MovieDetail {
        let mut movie = Self::movie(603, "The Matrix", "1999-03-30", 92.5);
        movie.overview = Some(
            "Set in the 22nd century, The Matrix tells the story of a computer hacker who joins \
             a group of underground insurgents fighting the vast and powerful computers who now \
             rule the earth."
                .to_string(),
        );
        movie.tagline = Some("Welcome to the Real World.".to_string());
        movie.runtime = Some(136);
        movie.budget = 63_000_000;
        movie.revenue = 463_517_383;
        movie.imdb_id = Some("tt0133093".to_string());
        movie.poster_path = Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".to_string());
        movie.genres = vec![
            Self::genre(28, "Action"),
            Self::genre(878, "Science Fiction"),
        ];
        movie.vote_average = 8.2;
        movie.vote_count = 24_000;
        movie
    }

    pub fn genre(id: u32, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
        }
    }

    /// Create the default catalogue: a few well-known movies plus enough
    /// filler to span two pages of popular results.
    pub fn default_scenario() -> Vec<MovieDetail> {
        let mut movies = vec![
            Self::the_matrix(),
            Self::movie(550, "Fight Club", "1999-10-15", 61.4),
            Self::movie(348, "Alien", "1979-05-25", 48.0),
            Self::movie(679, "Aliens", "1986-07-18", 40.2),
            Self::movie(949, "Heat", "1995-12-15", 35.7),
            Self::movie(78, "Blade Runner", "1982-06-25", 44.9),
        ];

        for i in 1..=19u64 {
            movies.push(Self::movie(
                900_000 + i,
                &format!("Sample Movie {i}"),
                "2020-01-01",
                i as f64 / 10.0,
            ));
        }

        movies
    }
}
