//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single search hit with its snippet already sanitized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the matched page
    pub title: String,
    /// Plain-text excerpt, markup removed
    pub snippet: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
        }
    }
}
