//! `MovieApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::Result;
use super::types::{Movie, SearchResult};

/// Movie metadata API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Fetches a movie by its TMDB ID.
    ///
    /// The ID is not validated locally; unknown IDs surface as the server's
    /// structured error.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the server responds with a
    /// non-200 status, or JSON decoding fails.
    async fn fetch_movie(&self, id: u64) -> Result<Movie>;

    /// Fetches the first page of popular movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the server responds with a
    /// non-200 status, or JSON decoding fails.
    async fn fetch_popular(&self) -> Result<SearchResult>;

    /// Searches movies by title. Adult titles are always excluded.
    ///
    /// # Errors
    ///
    /// Returns `TmdbError::EmptyQuery` without sending a request if `query`
    /// is empty. Otherwise as [`LocalMovieApi::fetch_movie`].
    async fn search_movies(&self, query: &str) -> Result<SearchResult>;
}
