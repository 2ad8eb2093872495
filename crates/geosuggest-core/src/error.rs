// crates/geosuggest-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the core crate.
///
/// Query-time operations never fail; only building an index from a source
/// can produce one of these, and the caller decides what to do with it.
#[derive(Debug, Error)]
pub enum GeoSuggestError {
    /// The source file could not be opened.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The source cannot be read in the current build configuration.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoSuggestError>;
