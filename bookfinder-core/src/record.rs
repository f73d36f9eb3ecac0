//! Display-ready search results

use serde::{Deserialize, Serialize};

/// One normalized search hit
///
/// Records are ephemeral: built from a single API response and held only
/// until the next search (desktop) or the end of the render pass (web).
/// Missing fields have already been defaulted by the normalizer, so
/// presenters can render every field without further checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    /// Book title, `"N/A"` when the API omitted it
    pub title: String,

    /// Author names in API order, `["Unknown"]` when absent
    pub authors: Vec<String>,

    /// Year of first publication, if known
    pub first_publish_year: Option<i32>,

    /// Cover identifier for the covers host; `None` means no cover exists
    pub cover_id: Option<i64>,
}

impl Default for BookRecord {
    fn default() -> Self {
        Self {
            title: "N/A".to_string(),
            authors: vec!["Unknown".to_string()],
            first_publish_year: None,
            cover_id: None,
        }
    }
}

impl BookRecord {
    /// Comma-joined author list for display
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }

    /// Publication year for display, `"N/A"` when unknown
    pub fn year_display(&self) -> String {
        match self.first_publish_year {
            Some(year) => year.to_string(),
            None => "N/A".to_string(),
        }
    }
}
