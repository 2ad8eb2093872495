//! HTTP handlers

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use geosuggest_core::api::SuggestionsResponse;
use geosuggest_core::text::{parse_coordinate, strip_diacritics};
use geosuggest_core::Autocomplete;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::ApiResult;

/// Content type of every suggestion response
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Query parameters for the suggestion endpoint
#[derive(Debug, Default, PartialEq)]
pub struct SuggestQuery {
    /// Free-text name prefix
    pub q: Option<String>,

    /// Reference latitude, sentinel when missing or unparsable
    pub latitude: Option<String>,

    /// Reference longitude, sentinel when missing or unparsable
    pub longitude: Option<String>,
}

impl SuggestQuery {
    /// Collect the known parameters from decoded query pairs.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut query.q,
                "latitude" => &mut query.latitude,
                "longitude" => &mut query.longitude,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// State shared across all handlers
///
/// The index is fully built before it is wrapped here and is never mutated
/// afterwards, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Read-only autocomplete index
    pub index: Arc<dyn Autocomplete>,

    /// Immutable server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new AppState from a built index
    pub fn new(index: Arc<dyn Autocomplete>, config: ServerConfig) -> Self {
        Self {
            index,
            config: Arc::new(config),
        }
    }
}

/// Any method on `/`, `/suggestions` and unrouted paths
pub async fn suggest(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Response> {
    let params = SuggestQuery::from_pairs(pairs);
    let prefix = strip_diacritics(params.q.as_deref().unwrap_or_default());
    let latitude = parse_coordinate(params.latitude.as_deref());
    let longitude = parse_coordinate(params.longitude.as_deref());

    let timer = Instant::now();
    let results = state.index.find(&prefix, latitude, longitude);
    debug!(
        prefix = %prefix,
        hits = results.len(),
        elapsed_us = timer.elapsed().as_micros() as u64,
        "search completed"
    );

    let body = SuggestionsResponse::from(results.as_slice()).to_json()?;
    Ok(([(header::CONTENT_TYPE, JSON_UTF8)], body).into_response())
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let stats = state.index.stats();
    Json(serde_json::json!({
        "status": "ok",
        "service": "geosuggest",
        "version": env!("CARGO_PKG_VERSION"),
        "places": stats.places,
        "trie_nodes": stats.trie_nodes,
    }))
}

/// Create router with all endpoints
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", any(suggest))
        .route("/suggestions", any(suggest))
        .route("/health", get(health_check))
        .fallback(suggest)
}
