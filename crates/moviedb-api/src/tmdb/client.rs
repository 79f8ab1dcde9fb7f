//! `TmdbClient` - TMDB API client implementation.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::instrument;
use url::Url;

use super::api::MovieApi;
use super::error::{Result, TmdbError};
use super::request::{build_url, normalize_base};
use super::response::{RawResponse, decode_response};
use super::types::{Movie, SearchResult};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// TMDB API client.
///
/// Immutable after construction; share it freely between tasks.
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client (timeout applied per request).
    http_client: Client,
    /// Base URL for API requests, always ending in `/`.
    base_url: Url,
    /// API key, sent as the `api_key` query parameter.
    api_key: String,
}

impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Builder for `TmdbClient`.
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl fmt::Debug for TmdbClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClientBuilder")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (default: `moviedb-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the per-request timeout (default: 10s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or is empty.
    /// - `timeout` is zero.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TmdbError::Config(String::from("api_key is required")))?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(TmdbError::Config(String::from("timeout must be greater than zero")));
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let http_client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| TmdbError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(TmdbClient {
            http_client,
            base_url: normalize_base(base_url),
            api_key,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Creates a client with default settings for the given API key.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_key` is empty or the HTTP client fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Sends a GET request and decodes the JSON body into `T`.
    ///
    /// One request per call; no retries.
    #[instrument(skip_all, fields(path = %path))]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = build_url(&self.base_url, path, query, &self.api_key)?;

        tracing::debug!("TMDB API request");
        let raw = self.send(url).await?;
        tracing::debug!(status = raw.status, "TMDB API response");

        decode_response(&raw)
    }

    /// Executes the GET and buffers the full response.
    ///
    /// The connection is released when the `reqwest::Response` is consumed
    /// or dropped, on every path out of this function.
    async fn send(&self, url: Url) -> Result<RawResponse> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

impl MovieApi for TmdbClient {
    #[instrument(skip_all)]
    async fn fetch_movie(&self, id: u64) -> Result<Movie> {
        let path = format!("movie/{id}");
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn fetch_popular(&self) -> Result<SearchResult> {
        self.get_json("movie/popular", &[]).await
    }

    #[instrument(skip_all)]
    async fn search_movies(&self, query: &str) -> Result<SearchResult> {
        if query.is_empty() {
            return Err(TmdbError::EmptyQuery);
        }

        let params = [
            ("query", String::from(query)),
            ("include_adult", String::from("false")),
        ];
        self.get_json("search/movie", &params).await
    }
}
