//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 endpoints
//! and retrieves movie details, popular movies, and search results.

mod api;
mod client;
mod error;
mod request;
mod response;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMovieApi, MovieApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_TIMEOUT, TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::{Result, TmdbError};
pub use types::{BACKDROP_BASE_URL, Genre, Movie, POSTER_BASE_URL, ResponseError, SearchResult};
