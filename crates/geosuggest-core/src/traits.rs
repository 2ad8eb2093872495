// crates/geosuggest-core/src/traits.rs
use crate::common::IndexStats;
use crate::model::{Place, PlaceId, Suggestion};

/// Resolves candidate identifiers to place records.
pub trait PlaceLookup {
    fn place(&self, id: PlaceId) -> Option<&Place>;
}

/// The read side of a built index.
///
/// Implementations are expected to be pure: `find` must not mutate anything
/// and is safe to call from many threads once the index is published.
pub trait Autocomplete: Send + Sync {
    /// Aggregate counts for diagnostics.
    fn stats(&self) -> IndexStats;

    /// Returns every place whose normalized name starts with `prefix`,
    /// ranked by descending relevance to the query and the reference point.
    ///
    /// `prefix` is expected to be diacritic-free already (see
    /// [`crate::text::strip_diacritics`]); case does not matter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geosuggest_core::{Autocomplete, Place, PlaceIndex};
    ///
    /// let mut index = PlaceIndex::new();
    /// index.add(Place::new(1, "Toronto", 43.70, -79.42, "Canada", "ON"), "Toronto");
    ///
    /// let hits = index.find("Tor", 43.70, -79.42);
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].name, "Toronto, ON, Canada");
    /// assert!(index.find("xyz", 0.0, 0.0).is_empty());
    /// ```
    fn find(&self, prefix: &str, latitude: f64, longitude: f64) -> Vec<Suggestion>;
}
