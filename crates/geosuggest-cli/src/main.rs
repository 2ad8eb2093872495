//! geosuggest - Command-line interface for geosuggest-core
//!
//! Builds the place-name index from a tab-delimited source and either
//! serves it over HTTP, answers a single query, or prints statistics.
//!
//! Usage examples
//! --------------
//!
//! - Serve on the configured port
//!   $ geosuggest serve
//!   $ GEOSUGGEST_PORT=9000 geosuggest --input cities.tsv.gz serve
//!
//! - One-off query
//!   $ geosuggest query tor --latitude 43.70 --longitude -79.42
//!
//! - Show index statistics
//!   $ geosuggest stats
//!
//! Data source
//! -----------
//!
//! By default the source is `cities_canada-usa.tsv` in the working
//! directory (or `GEOSUGGEST_DATA_PATH`). Use `--input <path>` to point
//! elsewhere; `.gz` files are decompressed on the fly.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geosuggest_core::api::SuggestionView;
use geosuggest_core::text::{parse_coordinate, strip_diacritics};
use geosuggest_core::{Autocomplete, IngestConfig, PlaceIndex};
use geosuggest_server::{ServerConfig, SuggestServer};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = ServerConfig::from_env();
    if args.verbose {
        config.log_level = "debug".to_string();
    }
    if let Some(input) = args.input {
        config.data_path = input;
    }
    geosuggest_cli::init_logging(&config.log_level).context("invalid log level")?;

    let ingest = IngestConfig::default();

    match args.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            let server = SuggestServer::new(config, &ingest)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server.start())?;
        }

        Commands::Query {
            prefix,
            latitude,
            longitude,
            limit,
        } => {
            let index = load(&config.data_path, &ingest)?;
            let prefix = strip_diacritics(&prefix);
            let latitude = parse_coordinate(latitude.as_deref());
            let longitude = parse_coordinate(longitude.as_deref());

            let hits = index.find(&prefix, latitude, longitude);
            if hits.is_empty() {
                println!("No places found matching: {prefix}");
            }
            for hit in hits.iter().take(limit.unwrap_or(usize::MAX)) {
                let view = SuggestionView::from(hit);
                println!(
                    "{:.1}  {} ({}, {})",
                    view.score, view.name, view.latitude, view.longitude
                );
            }
        }

        Commands::Stats => {
            let index = load(&config.data_path, &ingest)?;
            let stats = index.stats();
            println!("Index statistics:");
            println!("  Places: {}", stats.places);
            println!("  Trie nodes: {}", stats.trie_nodes);
        }
    }

    Ok(())
}

fn load(path: &str, ingest: &IngestConfig) -> anyhow::Result<PlaceIndex> {
    let (index, report) = PlaceIndex::load_from_path(path, ingest)
        .with_context(|| format!("failed to build index from {path}"))?;
    tracing::info!(
        "{} lines read, {} inserted, {} skipped in {:?}",
        report.lines,
        report.inserted,
        report.skipped(),
        report.elapsed
    );
    Ok(index)
}
