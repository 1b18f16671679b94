//! Search execution

use crate::error::{Result, SearchError};
use crate::network::{HttpTransport, SearchResponse};
use crate::query::SearchQuery;
use std::time::Instant;
use tracing::{debug, info};

/// Executes a single search request through an injected transport.
///
/// One attempt per call: failures are returned, never retried.
pub struct SearchExecutor<T> {
    transport: T,
}

impl<T: HttpTransport> SearchExecutor<T> {
    /// Create a new search executor
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send the query and return the raw response on a 2xx status
    pub async fn execute(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let start = Instant::now();
        debug!(
            "Searching '{}' via {}",
            query.raw_topic(),
            query.endpoint_url()
        );

        let response = match self.transport.get(query.endpoint_url()).await {
            Ok(response) => response,
            Err(e) => {
                debug!("Request failed for '{}': {}", query.raw_topic(), e);
                return Err(e);
            }
        };

        let elapsed = start.elapsed();

        if !response.is_success() {
            debug!(
                "Search for '{}' returned HTTP {} in {:?}",
                query.raw_topic(),
                response.status,
                elapsed
            );
            return Err(SearchError::HttpStatus {
                code: response.status,
            });
        }

        info!(
            "Search for '{}' returned {} bytes in {:?}",
            query.raw_topic(),
            response.body.len(),
            elapsed
        );

        Ok(response)
    }
}
