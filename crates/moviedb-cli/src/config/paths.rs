//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Config file name inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolves the config file path.
///
/// - `dir` given: `{dir}/config.toml`.
/// - `XDG_CONFIG_HOME` set: `$XDG_CONFIG_HOME/moviedb/config.toml`.
/// - Otherwise: `~/.config/moviedb/config.toml`.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    resolve_with_env(
        dir.map(PathBuf::as_path),
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_with_env(
    dir: Option<&Path>,
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE_NAME));
    }

    let config_root = match (xdg_config_home.filter(|p| p.is_absolute()), home) {
        (Some(xdg), _) => xdg,
        (None, Some(home)) => home.join(".config"),
        (None, None) => bail!("neither XDG_CONFIG_HOME nor HOME is set; pass --dir"),
    };
    Ok(config_root.join("moviedb").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_resolve_with_dir() {
        // Arrange
        let dir = PathBuf::from("/tmp/myproject");

        // Act
        let path = resolve_with_env(Some(&dir), None, None).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/myproject/config.toml"));
    }

    #[test]
    fn test_resolve_prefers_xdg_config_home() {
        // Arrange & Act
        let path = resolve_with_env(
            None,
            Some(PathBuf::from("/xdg")),
            Some(PathBuf::from("/home/user")),
        )
        .unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/xdg/moviedb/config.toml"));
    }

    #[test]
    fn test_resolve_ignores_relative_xdg_config_home() {
        // Arrange & Act
        let path = resolve_with_env(
            None,
            Some(PathBuf::from("relative")),
            Some(PathBuf::from("/home/user")),
        )
        .unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/home/user/.config/moviedb/config.toml"));
    }

    #[test]
    fn test_resolve_without_home_fails() {
        // Arrange & Act
        let result = resolve_with_env(None, None, None);

        // Assert
        assert!(result.is_err());
    }
}
