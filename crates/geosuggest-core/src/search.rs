// crates/geosuggest-core/src/search.rs

//! Query engine: trie walk, candidate resolution, scoring and ordering.

use crate::common::IndexStats;
use crate::index::PlaceIndex;
use crate::model::Suggestion;
use crate::score::score;
use crate::traits::{Autocomplete, PlaceLookup};
use crate::trie::PrefixTrie;
use std::cmp::Ordering;
use tracing::debug;

/// Runs a prefix query against `trie`, resolving candidates via `places`.
///
/// Candidates whose record cannot be resolved are dropped. The result is
/// sorted by descending score; the order among equal scores is not part of
/// the contract.
pub fn find_in<L: PlaceLookup + ?Sized>(
    trie: &PrefixTrie,
    places: &L,
    prefix: &str,
    latitude: f64,
    longitude: f64,
) -> Vec<Suggestion> {
    let normalized = prefix.to_lowercase();

    let Some(node) = trie.lookup(&normalized) else {
        debug!(prefix, latitude, longitude, "no trie entry");
        return Vec::new();
    };

    let mut out: Vec<Suggestion> = node
        .ids()
        .iter()
        .filter_map(|&id| places.place(id))
        .map(|place| Suggestion::from_place(place, score(place, prefix, latitude, longitude)))
        .collect();

    out.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    out
}

impl Autocomplete for PlaceIndex {
    fn stats(&self) -> IndexStats {
        PlaceIndex::stats(self)
    }

    fn find(&self, prefix: &str, latitude: f64, longitude: f64) -> Vec<Suggestion> {
        find_in(&self.trie, &self.store, prefix, latitude, longitude)
    }
}
