//! vidlens - resolve free-text movie and series queries into metadata captions.

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
use url::Url;

use crate::config::{AppConfig, resolve_config_path};
use vidlens_api::tmdb::TmdbClient;
use vidlens_core::deep_link::{self, DeepLinkError};
use vidlens_core::{LookupError, extract, lookup_checked, normalize_query};

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
    /// Resolve a query and print its metadata caption.
    Lookup(LookupArgs),
    /// Show how a query is normalized and split.
    Normalize(NormalizeArgs),
    /// Encode or decode bot start-link tokens.
    DeepLink(DeepLinkCommand),
}

/// Arguments for the `lookup` subcommand.
#[derive(clap::Args)]
struct LookupArgs {
    /// Free-text title, optionally with season/episode markers.
    #[arg(long)]
    query: String,

    /// Watch-provider region (ISO 3166-1). Defaults to the configured region.
    #[arg(long)]
    region: Option<String>,
}

/// Arguments for the `normalize` subcommand.
#[derive(clap::Args)]
struct NormalizeArgs {
    /// Free-text query.
    #[arg(long)]
    query: String,
}

/// Arguments for the `deep-link` subcommand.
#[derive(clap::Args)]
struct DeepLinkCommand {
    /// Deep-link subcommand to run.
    #[command(subcommand)]
    command: DeepLinkSubcommands,
}

/// Available deep-link subcommands.
#[derive(Subcommand)]
enum DeepLinkSubcommands {
    /// Print the start link for a query.
    Encode {
        /// Query to embed.
        #[arg(long)]
        query: String,
    },
    /// Print the query carried by a token or `/start <token>` text.
    Decode {
        /// Token or start command text.
        #[arg(long)]
        token: String,
    },
}

/// Loads the config from `--dir` or the default location.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    AppConfig::load(&config_path).context("failed to load config")
}

/// Builds a `TmdbClient` from `TMDB_API_TOKEN` and the `[tmdb]` config section.
///
/// # Errors
///
/// Returns an error if `TMDB_API_TOKEN` is not set, the configured base URL
/// is invalid, or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client(config: &AppConfig) -> Result<TmdbClient> {
    let api_token = std::env::var("TMDB_API_TOKEN")
        .context("TMDB_API_TOKEN environment variable is required")?;

    let mut builder = TmdbClient::builder()
        .api_token(api_token)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .language(&config.tmdb.language)
        .timeout(config.tmdb.timeout())
        .min_interval(config.tmdb.min_interval());
    if let Some(raw) = &config.tmdb.base_url {
        let base_url = Url::parse(raw).with_context(|| format!("invalid tmdb.base_url: {raw}"))?;
        builder = builder.base_url(base_url);
    }

    builder.build().context("failed to build TMDB client")
}

/// Runs the `lookup` subcommand.
///
/// "No results" is a normal outcome and exits successfully.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the client fails to build.
#[instrument(skip_all)]
async fn run_lookup(args: &LookupArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config)?;
    let region = args.region.as_deref().unwrap_or(&config.tmdb.region);

    match lookup_checked(&client, &args.query, region).await {
        Ok(record) => {
            tracing::info!("Poster: {}", record.poster_url);
            for line in record.caption().lines() {
                tracing::info!("{line}");
            }
        }
        Err(LookupError::NotFound(query)) => {
            tracing::info!("No results found for '{query}'");
        }
        Err(LookupError::Upstream { query, source }) => {
            tracing::warn!(error = %source, "catalog unavailable");
            tracing::info!("No results found for '{query}'");
        }
    }

    Ok(())
}

/// Runs the `normalize` subcommand.
fn run_normalize(args: &NormalizeArgs) {
    let normalized = normalize_query(&args.query);
    let extraction = extract(&normalized);

    tracing::info!("Normalized: {normalized}");
    tracing::info!("Title: {}", extraction.title);
    tracing::info!(
        "Season: {}",
        extraction
            .season
            .map_or_else(|| String::from("-"), |s| s.to_string())
    );
    tracing::info!(
        "Episode: {}",
        extraction
            .episode
            .map_or_else(|| String::from("-"), |e| e.to_string())
    );
}

/// Runs the `deep-link encode` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded.
fn run_deep_link_encode(query: &str, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let link = deep_link::start_link(&config.bot.host, &config.bot.username, query);
    tracing::info!("{link}");
    Ok(())
}

/// Runs the `deep-link decode` subcommand.
///
/// # Errors
///
/// Returns an error if the token is missing or malformed.
fn run_deep_link_decode(text: &str) -> Result<()> {
    let query = deep_link::token_from_start_param(text)
        .ok_or(DeepLinkError::Empty)
        .and_then(deep_link::decode)
        .context("Invalid or expired link")?;
    tracing::info!("{query}");
    Ok(())
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
        Commands::Lookup(args) => run_lookup(&args, cli.dir.as_ref()).await,
        Commands::Normalize(args) => {
            run_normalize(&args);
            Ok(())
        }
        Commands::DeepLink(cmd) => match cmd.command {
            DeepLinkSubcommands::Encode { query } => {
                run_deep_link_encode(&query, cli.dir.as_ref())
            }
            DeepLinkSubcommands::Decode { token } => run_deep_link_decode(&token),
        },
    }
}
