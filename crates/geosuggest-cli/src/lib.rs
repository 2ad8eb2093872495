//! geosuggest-cli
//! ==============
//!
//! Command-line interface for the `geosuggest-core` autocomplete index.
//!
//! This crate primarily provides a binary (`geosuggest`). The library target
//! carries the logging setup shared by its subcommands.
//!
//! Basic usage:
//!
//! ```text
//! geosuggest --help
//! geosuggest stats --input cities_canada-usa.tsv
//! geosuggest query "Montré" --latitude 45.5 --longitude -73.6
//! geosuggest serve --port 8080
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install the global `tracing` subscriber once.
///
/// `RUST_LOG` takes precedence over `level`. Later calls are no-ops.
pub fn init_logging(level: &str) -> Result<(), tracing_subscriber::filter::ParseError> {
    LOGGING
        .get_or_try_init(|| {
            let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(())
        })
        .map(|_| ())
}
