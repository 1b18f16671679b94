//! Search result types and extraction
//!
//! Turns a raw API response into typed, sanitized results.

mod extractor;
mod sanitize;
mod types;

pub use extractor::{extract, SearchResults};
pub use sanitize::strip_tags;
pub use types::*;
