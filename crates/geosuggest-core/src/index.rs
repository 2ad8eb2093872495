// crates/geosuggest-core/src/index.rs
use crate::common::IndexStats;
use crate::model::Place;
use crate::store::PlaceStore;
use crate::trie::{Alphabet, Insertion, PrefixTrie};

/// A record store and the prefix trie built against it.
///
/// Built through `&mut self` during startup, then shared read-only (usually
/// behind an `Arc`). Nothing in the query path needs `&mut`.
#[derive(Clone, Debug, Default)]
pub struct PlaceIndex {
    pub(crate) store: PlaceStore,
    pub(crate) trie: PrefixTrie,
}

impl PlaceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            store: PlaceStore::new(),
            trie: PrefixTrie::with_alphabet(alphabet),
        }
    }

    /// Registers `place` and indexes it under `normalized_name`.
    ///
    /// The record replaces any earlier one with the same id, while the trie
    /// keeps every insertion, so adding the same id twice makes it appear
    /// twice in results.
    pub fn add(&mut self, place: Place, normalized_name: &str) -> Insertion {
        let id = place.id;
        self.store.put(place);
        self.trie.insert(id, normalized_name)
    }

    pub fn store(&self) -> &PlaceStore {
        &self.store
    }

    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            places: self.store.len(),
            trie_nodes: self.trie.node_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_fills_store_and_trie() {
        let mut index = PlaceIndex::new();
        let ins = index.add(Place::new(1, "Québec", 46.8, -71.2, "Canada", "QC"), "Quebec");
        assert_eq!(ins.depth, 6);
        assert_eq!(index.len(), 1);
        assert_eq!(index.store().get(1).unwrap().name(), "Québec");
        assert_eq!(index.trie().lookup("queb").unwrap().ids(), &[1]);
        assert_eq!(
            index.stats(),
            IndexStats {
                places: 1,
                trie_nodes: 6
            }
        );
    }

    #[test]
    fn index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlaceIndex>();
    }
}
