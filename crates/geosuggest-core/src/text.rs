// crates/geosuggest-core/src/text.rs
use crate::common::COORDINATE_SENTINEL;
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Removes nonspacing marks (category `Mn`) from `s`.
///
/// Canonical decomposition, drop the `Mn` marks, recompose. Spacing (`Mc`)
/// and enclosing (`Me`) marks are kept. Letters without a
/// decomposition (`Ł`, `ø`, `ß`) are left alone; use [`fold_key`] when a
/// full ASCII transliteration is wanted.
///
/// # Examples
///
/// ```rust
/// use geosuggest_core::text::strip_diacritics;
///
/// assert_eq!(strip_diacritics("Montréal"), "Montreal");
/// assert_eq!(strip_diacritics("Trois-Rivières"), "Trois-Rivieres");
/// assert_eq!(strip_diacritics("Łódź"), "Łodz");
/// ```
pub fn strip_diacritics(s: &str) -> String {
    s.nfd()
        .filter(|c| c.general_category() != GeneralCategory::NonspacingMark)
        .nfc()
        .collect()
}

/// Convert a string into a folded key suitable for indexing.
///
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// ```rust
/// use geosuggest_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Sainte-Anne-des-Monts"), "sainte-anne-des-monts");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Parses a coordinate, falling back to [`COORDINATE_SENTINEL`].
///
/// Missing, unparsable and non-finite values (`"NaN"`, `"inf"`) all map to
/// the sentinel.
pub fn parse_coordinate(s: Option<&str>) -> f64 {
    parse_coordinate_or(s, COORDINATE_SENTINEL)
}

/// [`parse_coordinate`] with an explicit fallback.
pub fn parse_coordinate_or(s: Option<&str>, fallback: f64) -> f64 {
    s.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_keeps_case() {
        assert_eq!(strip_diacritics("Québec"), "Quebec");
        assert_eq!(strip_diacritics("ÎLE-PERROT"), "ILE-PERROT");
        assert_eq!(strip_diacritics("plain"), "plain");
        assert_eq!(strip_diacritics(""), "");
    }

    #[test]
    fn strips_precomposed_and_decomposed_forms_alike() {
        let precomposed = "Sept-\u{00CE}les";
        let decomposed = "Sept-I\u{0302}les";
        assert_eq!(strip_diacritics(precomposed), "Sept-Iles");
        assert_eq!(strip_diacritics(decomposed), "Sept-Iles");
    }

    #[test]
    fn only_nonspacing_marks_are_removed() {
        // DEVANAGARI VOWEL SIGN I is a spacing mark
        assert_eq!(strip_diacritics("\u{915}\u{93F}"), "\u{915}\u{93F}");
        // COMBINING ENCLOSING CIRCLE
        assert_eq!(strip_diacritics("a\u{20DD}"), "a\u{20DD}");
        assert_eq!(strip_diacritics("e\u{301}\u{20DD}"), "e\u{20DD}");
        assert_eq!(strip_diacritics("\u{915}\u{93F}").chars().count(), 2);
    }

    #[test]
    fn fold_key_transliterates() {
        assert_eq!(fold_key("Zürich"), "zurich");
        assert_eq!(fold_key("Straße"), "strasse");
    }

    #[test]
    fn coordinates_fall_back_to_sentinel() {
        assert_eq!(parse_coordinate(Some("43.7")), 43.7);
        assert_eq!(parse_coordinate(Some(" -79.42 ")), -79.42);
        assert_eq!(parse_coordinate(Some("")), COORDINATE_SENTINEL);
        assert_eq!(parse_coordinate(Some("north")), COORDINATE_SENTINEL);
        assert_eq!(parse_coordinate(Some("NaN")), COORDINATE_SENTINEL);
        assert_eq!(parse_coordinate(Some("inf")), COORDINATE_SENTINEL);
        assert_eq!(parse_coordinate(None), COORDINATE_SENTINEL);
        assert_eq!(parse_coordinate_or(Some("x"), 1.5), 1.5);
    }
}
