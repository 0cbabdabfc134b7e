//! TMDb API model types.

mod detail;
mod movie;

pub use detail::*;
pub use movie::*;

use chrono::NaiveDate;

/// Base URL for TMDb-hosted images.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Compose an image URL such as `https://image.tmdb.org/t/p/w500/abc.jpg`.
///
/// `size` is one of TMDb's size names (`w92`, `w185`, `w500`, `original`, ...).
pub fn image_url(size: &str, path: &str) -> String {
    format!("{IMAGE_BASE_URL}/{size}/{}", path.trim_start_matches('/'))
}

/// TMDb sends release dates as `YYYY-MM-DD`, or an empty string when unknown.
pub(crate) fn parse_release_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url("w500", "/kqjL17yufvn9OVLyXYpvtyrFfak.jpg"),
            "https://image.tmdb.org/t/p/w500/kqjL17yufvn9OVLyXYpvtyrFfak.jpg"
        );
    }

    #[test]
    fn test_parse_release_date() {
        let date = parse_release_date(Some("1999-03-30")).unwrap();
        assert_eq!(date.year(), 1999);
        assert!(parse_release_date(Some("")).is_none());
        assert!(parse_release_date(Some("soon")).is_none());
        assert!(parse_release_date(None).is_none());
    }
}
