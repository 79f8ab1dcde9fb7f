//! Response classification and decoding.

use serde::de::DeserializeOwned;

use super::error::{Result, TmdbError};
use super::types::ResponseError;

/// Content types TMDB uses for JSON error bodies.
const JSON_CONTENT_TYPES: [&str; 2] = ["application/json", "application/json;charset=utf-8"];

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header value, if present and valid UTF-8.
    pub content_type: Option<String>,
    /// Response body.
    pub body: Vec<u8>,
}

/// Decodes a 200 response into `T`, or classifies any other status as an error.
///
/// # Errors
///
/// - `TmdbError::Decode` if the body of a 200 response is not valid JSON for `T`.
/// - See [`classify_error`] for non-200 responses.
pub(crate) fn decode_response<T: DeserializeOwned>(raw: &RawResponse) -> Result<T> {
    if raw.status != 200 {
        return Err(classify_error(raw));
    }
    Ok(serde_json::from_slice(&raw.body)?)
}

/// Maps a non-200 response to an error.
///
/// Bodies are only parsed when the content type is JSON, so HTML pages from
/// gateways and proxies become `TmdbError::Status` instead of decode errors.
/// A JSON body that fails to parse is a `TmdbError::Decode`.
fn classify_error(raw: &RawResponse) -> TmdbError {
    let is_json = raw.content_type.as_deref().is_some_and(is_json_content_type);
    if !is_json {
        tracing::debug!(
            status = raw.status,
            content_type = raw.content_type.as_deref().unwrap_or("-"),
            "TMDB API error response without JSON body"
        );
        return TmdbError::Status { status: raw.status };
    }

    match serde_json::from_slice::<ResponseError>(&raw.body) {
        Ok(body) => TmdbError::Api {
            status: raw.status,
            code: body.status_code,
            message: body.message(),
        },
        Err(err) => TmdbError::Decode(err),
    }
}

/// Whether `value` is exactly one of the recognized JSON content types.
fn is_json_content_type(value: &str) -> bool {
    JSON_CONTENT_TYPES.contains(&value)
}
