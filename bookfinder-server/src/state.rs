//! Application state

use bookfinder_core::{ApiConfig, SearchClient};

/// Shared application state
///
/// Holds only the search client; every request is an independent
/// request/response cycle with no state carried between searches.
#[derive(Clone)]
pub struct AppState {
    pub client: SearchClient,
}

impl AppState {
    /// Create application state from the environment
    ///
    /// `BOOKFINDER_API_URL` and `BOOKFINDER_COVERS_URL` override the
    /// public Open Library endpoints.
    pub fn new() -> Self {
        let mut config = ApiConfig::default();
        if let Ok(url) = std::env::var("BOOKFINDER_API_URL") {
            config.search_base = url;
        }
        if let Ok(url) = std::env::var("BOOKFINDER_COVERS_URL") {
            config.covers_base = url;
        }
        Self::with_config(config)
    }

    /// Create application state with explicit endpoints (used by tests)
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            client: SearchClient::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
