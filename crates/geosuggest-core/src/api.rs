// crates/geosuggest-core/src/api.rs

//! JSON views of query results.
//!
//! These are the shapes served over the wire: coordinates become strings
//! with exactly five decimals, the score stays numeric.

use crate::model::Suggestion;
use serde::Serialize;

/// One entry of the `suggestions` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionView {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub score: f64,
}

impl From<&Suggestion> for SuggestionView {
    fn from(s: &Suggestion) -> Self {
        Self {
            name: s.name.clone(),
            latitude: format!("{:.5}", s.latitude),
            longitude: format!("{:.5}", s.longitude),
            score: s.score,
        }
    }
}

/// Response body: `{"suggestions": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<SuggestionView>,
}

impl SuggestionsResponse {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&[Suggestion]> for SuggestionsResponse {
    fn from(items: &[Suggestion]) -> Self {
        Self {
            suggestions: items.iter().map(SuggestionView::from).collect(),
        }
    }
}
