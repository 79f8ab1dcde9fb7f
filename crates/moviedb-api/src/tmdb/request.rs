//! Request URL construction.

use url::Url;

use super::error::Result;

/// Returns `base` with a trailing slash so relative joins keep its last segment.
///
/// `https://api.themoviedb.org/3` would otherwise lose `/3` on `join`.
pub(crate) fn normalize_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

/// Builds a fully-qualified request URL.
///
/// `path` is resolved relative to `base`. The credential is always sent as the
/// `api_key` query parameter, followed by `params` in order. All values are
/// percent-encoded.
///
/// # Errors
///
/// Returns `TmdbError::InvalidUrl` if `path` cannot be joined onto `base`.
pub(crate) fn build_url(
    base: &Url,
    path: &str,
    params: &[(&str, String)],
    api_key: &str,
) -> Result<Url> {
    let mut url = base.join(path.trim_start_matches('/'))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("api_key", api_key);
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn base() -> Url {
        Url::parse("https://api.themoviedb.org/3/").unwrap()
    }

    #[test]
    fn test_build_url_injects_api_key() {
        // Arrange & Act
        let url = build_url(&base(), "movie/293660", &[], "secret").unwrap();

        // Assert
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/movie/293660?api_key=secret"
        );
    }

    #[test]
    fn test_build_url_encodes_params() {
        // Arrange
        let params = [
            ("query", String::from("deadpool & wolverine")),
            ("include_adult", String::from("false")),
        ];

        // Act
        let url = build_url(&base(), "search/movie", &params, "k=1").unwrap();

        // Assert
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/search/movie?api_key=k%3D1&query=deadpool+%26+wolverine&include_adult=false"
        );
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(query.contains(&(String::from("query"), String::from("deadpool & wolverine"))));
    }

    #[test]
    fn test_build_url_strips_leading_slash() {
        // Arrange & Act
        let url = build_url(&base(), "/movie/popular", &[], "k").unwrap();

        // Assert
        assert_eq!(url.path(), "/3/movie/popular");
    }

    #[test]
    fn test_normalize_base_adds_trailing_slash() {
        // Arrange
        let raw = Url::parse("http://localhost:8080/3").unwrap();

        // Act
        let normalized = normalize_base(raw);

        // Assert
        assert_eq!(normalized.as_str(), "http://localhost:8080/3/");
        let url = build_url(&normalized, "movie/1", &[], "k").unwrap();
        assert_eq!(url.path(), "/3/movie/1");
    }

    #[test]
    fn test_normalize_base_keeps_existing_slash() {
        // Arrange & Act
        let normalized = normalize_base(base());

        // Assert
        assert_eq!(normalized, base());
    }
}
