#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviedb");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("movie"))
        .stdout(predicate::str::contains("popular"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_movie_missing_id() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviedb");
    cmd.arg("movie")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_search_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviedb");
    cmd.args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"));
}

#[test]
fn test_missing_api_key() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("moviedb");
    cmd.env_remove("TMDB_API_KEY")
        .arg("--dir")
        .arg(dir.path())
        .arg("popular")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TMDB API key is required"));
}

#[test]
fn test_search_empty_query_fails_without_request() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("moviedb");
    cmd.env("TMDB_API_KEY", "dummy-key")
        .arg("--dir")
        .arg(dir.path())
        .args(["search", "--query", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("query must be provided"));
}

#[test]
fn test_api_key_from_config_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[tmdb]\napi_key = \"from-file\"\n",
    )
    .unwrap();

    // Act & Assert (key accepted, so the local query guard is reached)
    let mut cmd = cargo_bin_cmd!("moviedb");
    cmd.env_remove("TMDB_API_KEY")
        .arg("--dir")
        .arg(dir.path())
        .args(["search", "--query", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("query must be provided"));
}

#[test]
fn test_invalid_config_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[tmdb\n").unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("moviedb");
    cmd.env("TMDB_API_KEY", "dummy-key")
        .arg("--dir")
        .arg(dir.path())
        .arg("popular")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_zero_timeout_in_config_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[tmdb]\ntimeout_secs = 0\n").unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("moviedb");
    cmd.env("TMDB_API_KEY", "dummy-key")
        .arg("--dir")
        .arg(dir.path())
        .arg("popular")
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout must be greater than zero"));
}
