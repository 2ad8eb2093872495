// crates/geosuggest-core/src/loader/config.rs
use crate::common::COORDINATE_SENTINEL;
use crate::trie::Alphabet;
use std::collections::HashMap;

/// Canadian province/territory codes as used by the source dataset.
pub const CANADA_REGION_CODES: &[(&str, &str)] = &[
    ("01", "AB"),
    ("02", "BC"),
    ("03", "MB"),
    ("04", "NB"),
    ("05", "NL"),
    ("07", "NS"),
    ("08", "ON"),
    ("09", "PE"),
    ("10", "QC"),
    ("11", "SK"),
    ("12", "YT"),
    ("13", "NT"),
    ("14", "NU"),
];

/// Immutable ingestion settings, built once and handed to the loader.
#[derive(Clone, Debug)]
pub struct IngestConfig {
    /// Country codes whose region field is used verbatim, with their label.
    pub native_regions: HashMap<String, String>,
    /// Label for every other country code.
    pub fallback_country: String,
    /// Two-digit region code -> region label, for the fallback country.
    pub region_codes: HashMap<String, String>,
    /// Skip the first line.
    pub has_header: bool,
    /// Substituted for unparsable coordinates.
    pub sentinel: f64,
    /// Allow-list for the trie's unrecognized-character reporting.
    pub alphabet: Alphabet,
}

impl Default for IngestConfig {
    /// The Canada/USA cities dataset.
    fn default() -> Self {
        Self {
            native_regions: HashMap::from([("US".to_string(), "USA".to_string())]),
            fallback_country: "Canada".to_string(),
            region_codes: CANADA_REGION_CODES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            has_header: true,
            sentinel: COORDINATE_SENTINEL,
            alphabet: Alphabet::default(),
        }
    }
}

impl IngestConfig {
    /// Resolves `(country label, region label)` for a line, or `None` when
    /// the region code has no mapping.
    pub fn resolve(&self, country_code: &str, region_code: &str) -> Option<(&str, String)> {
        if let Some(label) = self.native_regions.get(country_code) {
            return Some((label.as_str(), region_code.to_string()));
        }
        self.region_codes
            .get(region_code)
            .map(|region| (self.fallback_country.as_str(), region.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_regions_pass_through() {
        let cfg = IngestConfig::default();
        assert_eq!(cfg.resolve("US", "NY"), Some(("USA", "NY".to_string())));
        assert_eq!(cfg.resolve("US", ""), Some(("USA", String::new())));
    }

    #[test]
    fn canadian_codes_are_mapped() {
        let cfg = IngestConfig::default();
        assert_eq!(cfg.resolve("CA", "08"), Some(("Canada", "ON".to_string())));
        assert_eq!(cfg.resolve("CA", "10"), Some(("Canada", "QC".to_string())));
        assert_eq!(cfg.resolve("CA", "06"), None);
        assert_eq!(cfg.resolve("CA", "ON"), None);
    }
}
