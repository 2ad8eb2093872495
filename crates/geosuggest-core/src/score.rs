// crates/geosuggest-core/src/score.rs

//! Relevance scoring.
//!
//! Three capped fields are summed: name-length similarity (40), latitude
//! proximity (30) and longitude proximity (30). The sum is mapped to
//! `[0.0, 1.0]` and rounded to one decimal.

use crate::model::Place;

pub const NAME_WEIGHT: f64 = 40.0;
pub const LATITUDE_WEIGHT: f64 = 30.0;
pub const LONGITUDE_WEIGHT: f64 = 30.0;

/// Score of `place` for `query` seen from the reference point.
///
/// ```rust
/// use geosuggest_core::{score::score, Place};
///
/// let toronto = Place::new(1, "Toronto", 43.70, -79.42, "Canada", "ON");
/// // 40 / (7/3) + 30 + 30 = 77.14.. -> 0.8
/// assert_eq!(score(&toronto, "tor", 43.70, -79.42), 0.8);
/// ```
pub fn score(place: &Place, query: &str, latitude: f64, longitude: f64) -> f64 {
    let raw = name_field(query, place.name())
        + proximity_field(LATITUDE_WEIGHT, latitude - place.latitude)
        + proximity_field(LONGITUDE_WEIGHT, longitude - place.longitude);

    ((raw / 10.0).round() / 10.0).clamp(0.0, 1.0)
}

/// `min(40 / ratio, 40)` where `ratio` is the longer over the shorter length,
/// in chars. Zero when either side is empty.
pub fn name_field(query: &str, name: &str) -> f64 {
    let q = query.chars().count();
    let n = name.chars().count();
    if q == 0 || n == 0 {
        return 0.0;
    }
    let ratio = q.max(n) as f64 / q.min(n) as f64;
    (NAME_WEIGHT / ratio).min(NAME_WEIGHT)
}

/// `min(cap / |delta|, cap)`. A zero delta saturates; a NaN delta scores 0.
pub fn proximity_field(cap: f64, delta: f64) -> f64 {
    let distance = delta.abs();
    if distance.is_nan() {
        return 0.0;
    }
    if distance == 0.0 {
        return cap;
    }
    (cap / distance).min(cap)
}
