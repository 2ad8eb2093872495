// crates/geosuggest-core/src/lib.rs

//! # geosuggest-core
//!
//! In-memory place-name autocomplete. A [`PlaceIndex`] pairs a
//! [`PlaceStore`] with a [`PrefixTrie`]; queries walk the trie along the
//! normalized prefix, resolve the candidates and rank them by
//! [`score::score`], which mixes name-length similarity with distance to a
//! reference point.
//!
//! ```rust
//! use geosuggest_core::prelude::*;
//!
//! let mut index = PlaceIndex::new();
//! index.add(Place::new(1, "Toronto", 43.70, -79.42, "Canada", "ON"), "Toronto");
//! index.add(Place::new(2, "Torrance", 33.84, -118.34, "USA", "CA"), "Torrance");
//!
//! let prefix = strip_diacritics("Tör");
//! let hits = index.find(&prefix, 43.65, -79.38);
//! assert_eq!(hits[0].name, "Toronto, ON, Canada");
//! ```

pub mod api; // JSON views
pub mod common;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod score;
pub mod search;
pub mod store;
pub mod text;
pub mod traits;
pub mod trie;

// Re-exports
pub use crate::common::{IndexStats, COORDINATE_SENTINEL};
pub use crate::error::{GeoSuggestError, Result};
pub use crate::index::PlaceIndex;
pub use crate::loader::{IngestConfig, LoadReport};
pub use crate::model::{Place, PlaceId, Suggestion};
pub use crate::store::PlaceStore;
pub use crate::traits::{Autocomplete, PlaceLookup};
pub use crate::trie::{Alphabet, PrefixTrie, TrieNode};
