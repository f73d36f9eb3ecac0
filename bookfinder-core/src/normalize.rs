//! Response normalization
//!
//! Maps the raw Open Library search response into [`BookRecord`]s.
//! Every document field is optional on the wire; missing values are
//! substituted with display defaults and never fail. Order is whatever
//! the API returned; no sorting or deduplication.

use crate::record::BookRecord;
use serde::Deserialize;

/// Maximum number of hits taken from one response
pub const MAX_RESULTS: usize = 20;

/// Wire shape of the search response body
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Option<Vec<SearchDoc>>,
}

/// Wire shape of one `docs` entry
#[derive(Debug, Deserialize)]
pub struct SearchDoc {
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub first_publish_year: Option<i32>,
    pub cover_i: Option<i64>,
}

/// Outcome of normalizing one response
///
/// A missing or empty `docs` array is informational, not an error.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    NoResults,
    Results(Vec<BookRecord>),
}

impl From<SearchDoc> for BookRecord {
    fn from(doc: SearchDoc) -> Self {
        let authors = match doc.author_name {
            Some(names) if !names.is_empty() => names,
            _ => vec!["Unknown".to_string()],
        };
        Self {
            title: doc.title.unwrap_or_else(|| "N/A".to_string()),
            authors,
            first_publish_year: doc.first_publish_year,
            cover_id: doc.cover_i,
        }
    }
}

/// Normalize a parsed response into at most [`MAX_RESULTS`] records
pub fn normalize(response: SearchResponse) -> SearchOutcome {
    let docs = response.docs.unwrap_or_default();
    if docs.is_empty() {
        return SearchOutcome::NoResults;
    }

    let records = docs
        .into_iter()
        .take(MAX_RESULTS)
        .map(BookRecord::from)
        .collect();
    SearchOutcome::Results(records)
}
