//! geosuggest-server
//! =================
//!
//! Axum-based HTTP boundary for a built [`geosuggest_core::PlaceIndex`].
//!
//! `GET /?q=<prefix>&latitude=<lat>&longitude=<lon>` answers with
//! `{"suggestions":[{"name":..,"latitude":"..","longitude":"..","score":..}]}`.
//! The index is built before the router exists and shared read-only.

/// API error types
pub mod error;

/// Server configuration from the environment
pub mod config;

/// HTTP handlers
pub mod handlers;

/// Server instance management
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ServerError};
pub use handlers::{create_router, AppState};
pub use server::SuggestServer;
