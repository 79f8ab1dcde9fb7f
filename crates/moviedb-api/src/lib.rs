//! API client library for moviedb.
//!
//! Provides a client for the TMDB movie metadata API: movie lookup,
//! popular movies, and title search.

/// TMDB API client.
pub mod tmdb;
