// crates/geosuggest-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for an index.
///
/// Returned by [`crate::PlaceIndex::stats`]; the counts reflect the
/// materialized in-memory index after the build phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub places: usize,
    pub trie_nodes: usize,
}

/// Value substituted for a missing or unparsable coordinate (ingestion and
/// request parameters alike). Must stay non-zero.
pub const COORDINATE_SENTINEL: f64 = 0.00001;
