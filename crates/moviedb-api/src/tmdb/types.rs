//! TMDB API response types.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Base URL for poster images (w500).
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500/";

/// Base URL for backdrop images (w780).
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/w780/";

/// Decodes JSON `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Movie ---

/// A movie, as returned by `movie/{id}` or inside a search result page.
///
/// Search results omit several detail fields (`imdb_id`, `tagline`,
/// `genres`, `runtime`); those decode to their empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Movie {
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID (e.g. "tt1431045").
    #[serde(deserialize_with = "null_as_default")]
    pub imdb_id: String,
    /// Localized title.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Original title.
    #[serde(deserialize_with = "null_as_default")]
    pub original_title: String,
    /// Tagline.
    #[serde(deserialize_with = "null_as_default")]
    pub tagline: String,
    /// Overview text.
    #[serde(deserialize_with = "null_as_default")]
    pub overview: String,
    /// Genres.
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    /// Runtime in minutes.
    #[serde(deserialize_with = "null_as_default")]
    pub runtime: u32,
    /// Release date (YYYY-MM-DD, or empty).
    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,
    /// Backdrop image path fragment.
    #[serde(deserialize_with = "null_as_default")]
    pub backdrop_path: String,
    /// Poster image path fragment.
    #[serde(deserialize_with = "null_as_default")]
    pub poster_path: String,
    /// Adult flag.
    #[serde(deserialize_with = "null_as_default")]
    pub adult: bool,
}

impl Movie {
    /// Full poster image URL, or an empty string when the movie has no poster.
    #[must_use]
    pub fn poster_url(&self) -> String {
        image_url(POSTER_BASE_URL, &self.poster_path)
    }

    /// Full backdrop image URL, or an empty string when the movie has no backdrop.
    #[must_use]
    pub fn backdrop_url(&self) -> String {
        image_url(BACKDROP_BASE_URL, &self.backdrop_path)
    }

    /// Parses `release_date` as a calendar date.
    ///
    /// Returns `None` if the date is empty or not in `YYYY-MM-DD` form.
    #[must_use]
    pub fn release_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }
}

/// Prefixes `fragment` with `base`; an empty fragment yields an empty URL.
fn image_url(base: &str, fragment: &str) -> String {
    if fragment.is_empty() {
        return String::new();
    }
    format!("{base}{fragment}")
}

/// Genre entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Genre {
    /// Genre name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

// --- Search / Popular ---

/// A page of movies from `movie/popular` or `search/movie`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// Current page number.
    pub page: u32,
    /// Movies, in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<Movie>,
    /// Total number of results.
    pub total_results: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::module_name_repetitions)]
pub struct ResponseError {
    /// TMDB error code.
    pub status_code: i64,
    /// Error message.
    #[serde(deserialize_with = "null_as_default")]
    pub status_message: String,
    /// Sub-errors (validation failures).
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
}

impl ResponseError {
    /// Effective message: `status_message`, or the sub-errors joined with
    /// commas when the message is empty.
    #[must_use]
    pub fn message(&self) -> String {
        if self.status_message.is_empty() && !self.errors.is_empty() {
            return self.errors.join(",");
        }
        self.status_message.clone()
    }
}
