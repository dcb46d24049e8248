//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum; the backend client is internally pooled.

use crate::config::Config;
use crate::proxy::Backend;

#[derive(Clone, Debug)]
pub struct AppState {
    pub backend: Backend,
}

impl AppState {
    /// # Errors
    ///
    /// Fails if the backend HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self { backend: Backend::new(&config.backend_url, config.backend_timeout)? })
    }
}
