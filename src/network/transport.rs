//! Transport abstraction used by the search executor

use crate::error::Result;
use async_trait::async_trait;

/// Raw HTTP response as returned by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, untouched
    pub body: String,
}

impl SearchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a GET request and returns status and body.
///
/// Implementations report connection-level failures as
/// [`SearchError::Transport`](crate::SearchError::Transport) and must not
/// interpret the status code themselves.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<SearchResponse>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn get(&self, url: &str) -> Result<SearchResponse> {
        (**self).get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(SearchResponse::new(200, "").is_success());
        assert!(SearchResponse::new(204, "").is_success());
        assert!(SearchResponse::new(299, "").is_success());
        assert!(!SearchResponse::new(199, "").is_success());
        assert!(!SearchResponse::new(301, "").is_success());
        assert!(!SearchResponse::new(404, "").is_success());
        assert!(!SearchResponse::new(500, "").is_success());
    }
}
