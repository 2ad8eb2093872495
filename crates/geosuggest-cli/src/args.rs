use clap::{Parser, Subcommand};

/// CLI arguments for geosuggest
#[derive(Debug, Parser)]
#[command(
    name = "geosuggest",
    version,
    about = "Build and query the geosuggest place-name autocomplete index"
)]
pub struct CliArgs {
    /// Path to the tab-delimited source (.tsv or .tsv.gz); overrides GEOSUGGEST_DATA_PATH
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the index and serve suggestions over HTTP
    Serve {
        /// Bind address; overrides GEOSUGGEST_HOST
        #[arg(long)]
        host: Option<String>,

        /// Port; overrides GEOSUGGEST_PORT
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },

    /// Run a single query and print the ranked suggestions
    Query {
        /// Name prefix (accents and case are ignored)
        prefix: String,

        /// Reference latitude
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<String>,

        /// Reference longitude
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<String>,

        /// Print at most this many suggestions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show a summary of the index built from the source
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_query_with_negative_longitude() {
        let args = CliArgs::parse_from([
            "geosuggest", "query", "tor", "--latitude", "43.7", "--longitude", "-79.42", "-n", "5",
        ]);
        match args.command {
            Commands::Query {
                prefix,
                latitude,
                longitude,
                limit,
            } => {
                assert_eq!(prefix, "tor");
                assert_eq!(latitude.as_deref(), Some("43.7"));
                assert_eq!(longitude.as_deref(), Some("-79.42"));
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_input_after_subcommand() {
        let args = CliArgs::parse_from(["geosuggest", "stats", "--input", "cities.tsv.gz", "-v"]);
        assert_eq!(args.input.as_deref(), Some("cities.tsv.gz"));
        assert!(args.verbose);
        assert!(matches!(args.command, Commands::Stats));
    }
}
