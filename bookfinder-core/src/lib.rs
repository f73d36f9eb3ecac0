//! Book Finder Core Library
//!
//! This crate provides the shared search pipeline for the Book Finder
//! front-ends: building a search URL from a raw title, fetching the Open
//! Library response, and normalizing each hit into a display-ready
//! [`BookRecord`]. Presentation is left to the web and desktop crates.

pub mod config;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod query;
pub mod record;

pub use config::{ApiConfig, CoverSize};
pub use error::{Result, SearchError};
pub use fetch::SearchClient;
pub use normalize::{SearchOutcome, MAX_RESULTS};
pub use record::BookRecord;
