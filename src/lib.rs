//! geosuggest-rs
//!
//! Umbrella crate re-exporting [`geosuggest_core`] so the demos can use a
//! single import path.

pub use geosuggest_core::*;
