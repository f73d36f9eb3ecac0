//! API endpoint configuration
//!
//! The Open Library hosts are fixed values injected when the client is
//! constructed. Tests point them at a mock server instead.

/// Cover image size requested from the covers host
///
/// Medium is used in list views, Large in the desktop detail window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
    Medium,
    Large,
}

impl CoverSize {
    /// Size letter used in the cover URL
    pub fn letter(self) -> char {
        match self {
            CoverSize::Medium => 'M',
            CoverSize::Large => 'L',
        }
    }
}

/// Immutable endpoint configuration for the Open Library API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Search endpoint, e.g. `https://openlibrary.org/search.json`
    pub search_base: String,

    /// Cover host prefix, e.g. `http://covers.openlibrary.org/b/id`
    pub covers_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_base: "https://openlibrary.org/search.json".to_string(),
            covers_base: "http://covers.openlibrary.org/b/id".to_string(),
        }
    }
}

impl ApiConfig {
    /// Build the URL for a cover image in the given size
    pub fn cover_url(&self, cover_id: i64, size: CoverSize) -> String {
        format!("{}/{}-{}.jpg", self.covers_base, cover_id, size.letter())
    }
}
