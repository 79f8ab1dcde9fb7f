//! moviedb - TMDB movie metadata CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, resolve_config_path};
use moviedb_api::tmdb::{Movie, MovieApi, SearchResult, TmdbClient};

/// Environment variable holding the TMDB API key.
const API_KEY_ENV: &str = "TMDB_API_KEY";

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Get movie details by TMDB ID.
    Movie(MovieArgs),
    /// List popular movies.
    Popular,
    /// Search movies by title.
    Search(SearchArgs),
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieArgs {
    /// TMDB movie ID (e.g. 293660).
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "deadpool").
    #[arg(long, required = true)]
    query: String,
}

/// Builds a `TmdbClient` from `TMDB_API_KEY` or `config.toml`.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, no API key is
/// available, or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client(dir: Option<&PathBuf>) -> Result<TmdbClient> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let api_key = config
        .tmdb
        .resolve_api_key(std::env::var(API_KEY_ENV).ok())
        .context("TMDB API key is required (set TMDB_API_KEY or tmdb.api_key in config.toml)")?;

    let mut builder = TmdbClient::builder().api_key(api_key).user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = config.tmdb.timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build().context("failed to build TMDB client")
}

/// Runs the `movie` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie(args: &MovieArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_tmdb_client(dir)?;

    let movie = client
        .fetch_movie(args.id)
        .await
        .context("TMDB movie request failed")?;

    print_movie(&movie);
    Ok(())
}

/// Runs the `popular` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_popular(dir: Option<&PathBuf>) -> Result<()> {
    let client = build_tmdb_client(dir)?;

    let result = client
        .fetch_popular()
        .await
        .context("TMDB movie/popular request failed")?;

    print_search_result(&result);
    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_tmdb_client(dir)?;

    let result = client
        .search_movies(&args.query)
        .await
        .context("TMDB search/movie request failed")?;

    print_search_result(&result);
    Ok(())
}

/// Prints a single movie's details.
fn print_movie(movie: &Movie) {
    let or_dash = |s: &str| if s.is_empty() { String::from("-") } else { String::from(s) };

    tracing::info!("ID: {} (IMDb: {})", movie.id, or_dash(&movie.imdb_id));
    tracing::info!("Title: {}", movie.title);
    tracing::info!("Original Title: {}", movie.original_title);
    tracing::info!("Tagline: {}", or_dash(&movie.tagline));
    tracing::info!(
        "Genres: {}",
        or_dash(
            &movie
                .genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    );
    tracing::info!("Runtime: {}min", movie.runtime);
    tracing::info!("Release Date: {}", or_dash(&movie.release_date));
    tracing::info!("Poster: {}", or_dash(&movie.poster_url()));
    tracing::info!("Backdrop: {}", or_dash(&movie.backdrop_url()));
    tracing::info!("---");
    tracing::info!("{}", movie.overview);
}

/// Prints a page of movies.
fn print_search_result(result: &SearchResult) {
    tracing::info!(
        "Page {}/{} (total results: {})",
        result.page,
        result.total_pages,
        result.total_results
    );
    tracing::info!("ID\tReleaseDate\tTitle");
    for movie in &result.results {
        tracing::info!(
            "{}\t{}\t{}",
            movie.id,
            if movie.release_date.is_empty() {
                "-"
            } else {
                movie.release_date.as_str()
            },
            movie.title,
        );
    }
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Movie(args) => run_movie(&args, cli.dir.as_ref()).await,
        Commands::Popular => run_popular(cli.dir.as_ref()).await,
        Commands::Search(args) => run_search(&args, cli.dir.as_ref()).await,
    }
}
