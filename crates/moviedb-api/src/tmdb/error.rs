//! TMDB client error type.

use thiserror::Error;

/// Result alias for TMDB client operations.
pub type Result<T> = std::result::Result<T, TmdbError>;

/// Errors returned by `TmdbClient` operations.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TmdbError {
    /// Network, DNS, or timeout failure before a response was received.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// `search_movies` was called with an empty query. No request is sent.
    #[error("query must be provided")]
    EmptyQuery,

    /// Non-200 response whose body is not JSON (e.g. a proxy HTML page).
    #[error("Invalid response status code ({status})")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Non-200 response carrying a structured TMDB error body.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// TMDB `status_code` from the error body (0 when absent).
        code: i64,
        /// Effective error message.
        message: String,
    },

    /// A response body (success or error) was not valid JSON for the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request URL could not be assembled.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The client could not be constructed.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl TmdbError {
    /// Returns the HTTP status code when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } | Self::Api { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::EmptyQuery | Self::Decode(_) | Self::InvalidUrl(_) | Self::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_message() {
        // Arrange & Act
        let err = TmdbError::EmptyQuery;

        // Assert
        assert_eq!(err.to_string(), "query must be provided");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_status_message_contains_code() {
        // Arrange & Act
        let err = TmdbError::Status { status: 401 };

        // Assert
        assert_eq!(err.to_string(), "Invalid response status code (401)");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_api_error_displays_message_only() {
        // Arrange & Act
        let err = TmdbError::Api {
            status: 401,
            code: 7,
            message: String::from("Invalid API key: You must be granted a valid key."),
        };

        // Assert
        assert_eq!(
            err.to_string(),
            "Invalid API key: You must be granted a valid key."
        );
        assert_eq!(err.status(), Some(401));
    }
}
