// crates/geosuggest-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a place, stable for the lifetime of the process.
pub type PlaceId = i64;

/// A place in the record store.
///
/// Created once during the build phase and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub region: String,
}

impl Place {
    pub fn new(
        id: PlaceId,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        country: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            latitude,
            longitude,
            country: country.into(),
            region: region.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Display label used in suggestions, e.g. `"Toronto, ON, Canada"`.
    pub fn label(&self) -> String {
        format!("{}, {}, {}", self.name, self.region, self.country)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.region, self.country)
    }
}

/// One scored result of [`crate::Autocomplete::find`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Suggestion {
    pub id: PlaceId,
    /// `"{name}, {region}, {country}"`
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Relevance in `[0.0, 1.0]`, one decimal.
    pub score: f64,
}

impl Suggestion {
    pub fn from_place(place: &Place, score: f64) -> Self {
        Self {
            id: place.id,
            name: place.label(),
            latitude: place.latitude,
            longitude: place.longitude,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_orders_name_region_country() {
        let p = Place::new(1, "Toronto", 43.70, -79.42, "Canada", "ON");
        assert_eq!(p.label(), "Toronto, ON, Canada");
        assert_eq!(p.to_string(), p.label());
    }

    #[test]
    fn suggestion_copies_coordinates() {
        let p = Place::new(7, "Montréal", 45.5, -73.57, "Canada", "QC");
        let s = Suggestion::from_place(&p, 0.4);
        assert_eq!(s.id, 7);
        assert_eq!(s.name, "Montréal, QC, Canada");
        assert_eq!(s.latitude, 45.5);
        assert_eq!(s.longitude, -73.57);
        assert_eq!(s.score, 0.4);
    }
}
