//! HTTP fetch against the Open Library API

use crate::config::{ApiConfig, CoverSize};
use crate::error::{Result, SearchError};
use crate::normalize::{normalize, SearchOutcome, SearchResponse};
use crate::query::build_search_url;

/// Client for the Open Library search and covers endpoints
///
/// One GET per call: no retries, no caching, redirect handling is
/// whatever reqwest does by default. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SearchClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Endpoint configuration this client was built with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Search by title and normalize the response
    ///
    /// Rejects empty titles before any request is made. Transport
    /// failures, non-success statuses, and malformed JSON each map to
    /// their own [`SearchError`] variant.
    pub async fn search(&self, raw_title: &str) -> Result<SearchOutcome> {
        let url = build_search_url(&self.config, raw_title)?;

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(normalize(parsed))
    }

    /// Fetch the raw JPEG bytes of a cover image
    pub async fn fetch_cover(&self, cover_id: i64, size: CoverSize) -> Result<Vec<u8>> {
        let url = self.config.cover_url(cover_id, size);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
