//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::MovieDetail;

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn heading(title: &str, year: Option<i32>) -> String {
    match year {
        Some(y) => format!("{title} ({y})"),
        None => title.to_string(),
    }
}

impl PrettyPrint for MovieDetail {
    fn pretty_print(&self) -> String {
        let header = heading(&self.title, self.release_year());
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider, format!("ID:             {}", self.id)];

        if let Some(tagline) = self.tagline.as_deref().filter(|t| !t.is_empty()) {
            lines.push(format!("Tagline:        {}", tagline));
        }

        if !self.genres.is_empty() {
            lines.push(format!("Genres:         {}", self.genre_names()));
        }

        if let Some(runtime) = self.runtime_display() {
            lines.push(format!("Runtime:        {}", runtime));
        }

        if let Some(date) = self.release_date() {
            lines.push(format!("Released:       {}", date.format("%Y-%m-%d")));
        }

        if let Some(ref status) = self.status {
            lines.push(format!("Status:         {}", status));
        }

        lines.push(format!(
            "Rating:         {:.1}/10 ({} votes)",
            self.vote_average, self.vote_count
        ));

        if let Some(url) = self.imdb_url() {
            lines.push(format!("IMDb:           {}", url));
        }

        if let Some(overview) = self.overview.as_deref().filter(|o| !o.is_empty()) {
            lines.push(String::new());
            lines.push(overview.to_string());
        }

        lines.join("\n")
    }
}
