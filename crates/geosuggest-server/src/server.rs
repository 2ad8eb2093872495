//! Server instance management

use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use geosuggest_core::{Autocomplete, IngestConfig, PlaceIndex};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::handlers::{create_router, AppState};

/// geosuggest HTTP server
///
/// Owns the published index. Construction builds the index; only a fully
/// built index is ever handed to the router.
pub struct SuggestServer {
    /// Server configuration
    config: ServerConfig,

    /// Built, read-only index
    index: Arc<dyn Autocomplete>,
}

impl SuggestServer {
    /// Validate `config` and build the index from `config.data_path`.
    ///
    /// # Errors
    ///
    /// [`ServerError::Config`] for an invalid configuration and
    /// [`ServerError::Index`] when the source cannot be read.
    pub fn new(config: ServerConfig, ingest: &IngestConfig) -> Result<Self, ServerError> {
        config.validate().map_err(ServerError::Config)?;

        let (index, report) = PlaceIndex::load_from_path(&config.data_path, ingest).map_err(|e| {
            error!("Failed to build index: {}", e);
            e
        })?;
        info!(
            "Index ready: {} places from {} lines ({} skipped)",
            index.len(),
            report.lines,
            report.skipped()
        );

        Ok(Self::with_index(config, Arc::new(index)))
    }

    /// Wrap an already built index.
    pub fn with_index(config: ServerConfig, index: Arc<dyn Autocomplete>) -> Self {
        Self { config, index }
    }

    /// The router with state attached, as served by [`SuggestServer::start`].
    pub fn router(&self) -> axum::Router {
        let state = AppState::new(Arc::clone(&self.index), self.config.clone());
        let router = create_router().with_state(state);
        if self.config.enable_logging {
            router.layer(TraceLayer::new_for_http())
        } else {
            router
        }
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> Result<(), ServerError> {
        let addr = self.config.socket_addr().map_err(ServerError::Config)?;

        let listener = TcpListener::bind(addr).await.map_err(|source| {
            error!("Failed to bind to {}: {:?}", addr, source);
            ServerError::Bind {
                addr: addr.to_string(),
                source,
            }
        })?;

        info!("Serving on: {}", self.server_url());

        axum::serve(listener, self.router())
            .await
            .map_err(ServerError::Serve)
    }

    /// Get server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        self.config.server_url()
    }

    /// Shared handle to the index
    #[must_use]
    pub fn index(&self) -> Arc<dyn Autocomplete> {
        Arc::clone(&self.index)
    }
}
