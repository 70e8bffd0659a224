//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled upstream HTTP client and nothing else: the relay keeps no
//! per-request or cached state.

use crate::config::RelayConfig;
use crate::services::upstream::{self, RelayError};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the client is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an upstream client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let http = upstream::build_client(config)?;
        Ok(Self { http })
    }
}
