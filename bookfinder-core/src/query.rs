//! Search URL construction

use crate::config::ApiConfig;
use crate::error::{Result, SearchError};

/// Build the search URL for a raw title
///
/// The title is trimmed; an empty result is rejected with
/// [`SearchError::EmptyQuery`] so callers never issue a request for it.
/// The title is substituted into the template as-is. The upstream
/// implementation never URL-encoded the query and that behavior is kept;
/// titles with reserved characters are a known gap.
pub fn build_search_url(config: &ApiConfig, raw_title: &str) -> Result<String> {
    let title = raw_title.trim();
    if title.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(format!("{}?title={}", config.search_base, title))
}
