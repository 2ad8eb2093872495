// crates/geosuggest-core/src/store.rs
use crate::model::{Place, PlaceId};
use crate::traits::PlaceLookup;
use std::collections::HashMap;

/// Holds the canonical attributes of every indexed place.
///
/// Field sanity is the inserter's business; the store accepts whatever it
/// is given.
#[derive(Clone, Debug, Default)]
pub struct PlaceStore {
    places: HashMap<PlaceId, Place>,
}

impl PlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a place, replacing any previous entry with the same id.
    pub fn put(&mut self, place: Place) {
        self.places.insert(place.id, place);
    }

    pub fn get(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(&id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Iterates in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.values()
    }
}

impl PlaceLookup for PlaceStore {
    #[inline]
    fn place(&self, id: PlaceId) -> Option<&Place> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get() {
        let mut store = PlaceStore::new();
        assert!(store.is_empty());
        store.put(Place::new(1, "Toronto", 43.7, -79.42, "Canada", "ON"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).map(Place::name), Some("Toronto"));
        assert!(store.get(2).is_none());
    }

    #[test]
    fn put_overwrites_same_id() {
        let mut store = PlaceStore::new();
        store.put(Place::new(5, "Old", 1.0, 1.0, "USA", "NY"));
        store.put(Place::new(5, "New", 2.0, 2.0, "USA", "NJ"));
        assert_eq!(store.len(), 1);
        let p = store.place(5).unwrap();
        assert_eq!(p.name(), "New");
        assert_eq!(p.region(), "NJ");
    }
}
