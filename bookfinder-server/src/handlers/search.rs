//! Search page handlers

use crate::pages;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::Html,
};
use bookfinder_core::{SearchError, SearchOutcome};
use serde::Deserialize;

/// Query parameters for the search page
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Raw title as typed into the form
    pub title: Option<String>,
}

/// Render the empty search form
pub async fn index() -> Html<String> {
    Html(pages::search_page("", None))
}

/// Run a search and render the form with its outcome
///
/// Empty or whitespace-only input is rejected before any request goes
/// out. All fetch and parse failures surface as one generic error line
/// carrying the underlying error text; zero hits is informational.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let raw_title = params.title.unwrap_or_default();

    let body = match state.client.search(&raw_title).await {
        Err(SearchError::EmptyQuery) => {
            pages::notice("warning", "Please enter a book title to search.")
        }
        Err(e) => {
            tracing::warn!("search failed: {}", e);
            pages::notice("error", &format!("Failed to fetch data: {}", e))
        }
        Ok(SearchOutcome::NoResults) => {
            tracing::debug!("no results for {:?}", raw_title.trim());
            pages::notice("info", "No books found for your search.")
        }
        Ok(SearchOutcome::Results(records)) => {
            tracing::debug!("{} results for {:?}", records.len(), raw_title.trim());
            pages::results_list(&records, state.client.config())
        }
    };

    Html(pages::search_page(&raw_title, Some(&body)))
}
