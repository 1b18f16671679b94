//! wikisearch-rs: command-line Wikipedia full-text search
//!
//! Builds a MediaWiki search request, prints the title and snippet of each
//! hit, and keeps the raw API response on disk as pretty-printed JSON.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod network;
pub mod output;
pub mod query;
pub mod results;
pub mod search;

pub use app::{App, Report};
pub use config::Settings;
pub use error::{Result, SearchError};
pub use network::{HttpClient, HttpTransport, SearchResponse};
pub use output::ResponseSaver;
pub use query::{QueryBuilder, SearchQuery};
pub use results::{extract, strip_tags, SearchResult, SearchResults};
pub use search::SearchExecutor;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
