//! geosuggest prelude: bring common types and traits into scope.

pub use crate::api::{SuggestionView, SuggestionsResponse};
pub use crate::error::{GeoSuggestError, Result};
pub use crate::loader::{IngestConfig, LoadReport};
pub use crate::model::{Place, PlaceId, Suggestion};
pub use crate::text::{fold_key, parse_coordinate, strip_diacritics};
pub use crate::traits::Autocomplete;
pub use crate::{PlaceIndex, PlaceStore, PrefixTrie};
