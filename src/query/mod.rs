//! Search query construction
//!
//! Turns a raw topic into a fully encoded MediaWiki search URL:
//! `<base>?action=query&format=json&list=search&srsearch=<topic>`.

use crate::config::ApiSettings;
use crate::error::{Result, SearchError};
use url::Url;

/// Fixed parameters sent with every search, in order
const FIXED_PARAMS: [(&str, &str); 3] = [("action", "query"), ("format", "json"), ("list", "search")];

/// Parameter carrying the encoded topic
const SEARCH_PARAM: &str = "srsearch";

/// Language used when none (or `all`) is requested
const DEFAULT_LANG: &str = "en";

/// A search request ready to be sent. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw_topic: String,
    encoded_topic: String,
    endpoint_url: String,
}

impl SearchQuery {
    /// The topic as supplied by the caller
    pub fn raw_topic(&self) -> &str {
        &self.raw_topic
    }

    /// The percent-encoded topic
    pub fn encoded_topic(&self) -> &str {
        &self.encoded_topic
    }

    /// The complete request URL
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

/// Builds [`SearchQuery`] values against one API endpoint
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_url: String,
}

impl QueryBuilder {
    /// Create a builder for a concrete endpoint (no placeholders)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create a builder from API settings, resolving the `{lang}` placeholder
    pub fn from_settings(api: &ApiSettings) -> Self {
        Self::new(resolve_endpoint(&api.base_url, &api.lang))
    }

    /// Endpoint the builder targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a query for a topic
    pub fn build(&self, raw_topic: &str) -> Result<SearchQuery> {
        let encoded_topic = urlencoding::encode(raw_topic).into_owned();

        let mut url = Url::parse(&self.base_url).map_err(|source| SearchError::InvalidEndpoint {
            url: self.base_url.clone(),
            source,
        })?;

        let query_string = FIXED_PARAMS
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .chain(std::iter::once(format!("{}={}", SEARCH_PARAM, encoded_topic)))
            .collect::<Vec<_>>()
            .join("&");
        // Already percent-encoded, so the url crate leaves it as is
        url.set_query(Some(&query_string));

        Ok(SearchQuery {
            raw_topic: raw_topic.to_string(),
            encoded_topic,
            endpoint_url: url.to_string(),
        })
    }

    /// Build a query from bytes that may not be valid UTF-8
    pub fn build_from_bytes(&self, raw_topic: &[u8]) -> Result<SearchQuery> {
        let topic =
            std::str::from_utf8(raw_topic).map_err(|e| SearchError::Encoding(e.to_string()))?;
        self.build(topic)
    }
}

/// Replace `{lang}` in an endpoint template.
///
/// Region suffixes are dropped (`en-US` -> `en`); `all` or an empty code
/// falls back to English.
pub fn resolve_endpoint(template: &str, lang: &str) -> String {
    let lang = if lang == "all" || lang.is_empty() {
        DEFAULT_LANG
    } else {
        lang.split('-').next().unwrap_or(DEFAULT_LANG)
    };
    template.replace("{lang}", lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

    fn srsearch(query: &SearchQuery) -> String {
        let url = Url::parse(query.endpoint_url()).unwrap();
        url.query_pairs()
            .find(|(k, _)| k == "srsearch")
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn test_basic_query() {
        let query = QueryBuilder::new(ENDPOINT).build("oman").unwrap();
        assert_eq!(query.raw_topic(), "oman");
        assert_eq!(query.encoded_topic(), "oman");
        assert_eq!(
            query.endpoint_url(),
            "https://en.wikipedia.org/w/api.php?action=query&format=json&list=search&srsearch=oman"
        );
    }

    #[test]
    fn test_ascii_round_trip() {
        let builder = QueryBuilder::new(ENDPOINT);
        for topic in ["rust programming", "a+b=c", "50% off", "what?", "x/y\\z", "~tilde_-."] {
            let query = builder.build(topic).unwrap();
            assert_eq!(srsearch(&query), topic);
        }
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let query = QueryBuilder::new(ENDPOINT).build("fish & chips #1 + more?").unwrap();
        let encoded = query.encoded_topic();
        for c in [' ', '&', '#', '+', '?', '='] {
            assert!(!encoded.contains(c), "{:?} leaked into {}", c, encoded);
        }
        assert_eq!(encoded, "fish%20%26%20chips%20%231%20%2B%20more%3F");
        assert!(!query.endpoint_url().contains('#'));
        assert!(!query.endpoint_url().contains(' '));
    }

    #[test]
    fn test_non_ascii_topic() {
        let query = QueryBuilder::new(ENDPOINT).build("Zürich – ōman").unwrap();
        assert!(query.encoded_topic().is_ascii());
        assert_eq!(srsearch(&query), "Zürich – ōman");
    }

    #[test]
    fn test_existing_query_string_replaced() {
        let query = QueryBuilder::new("https://example.org/api.php?stale=1")
            .build("x")
            .unwrap();
        assert!(!query.endpoint_url().contains("stale"));
        assert!(query.endpoint_url().starts_with("https://example.org/api.php?action=query"));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let err = QueryBuilder::new(ENDPOINT)
            .build_from_bytes(&[0x6f, 0xff, 0x6d])
            .unwrap_err();
        assert!(matches!(err, SearchError::Encoding(_)));
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = QueryBuilder::new("not a url").build("oman").unwrap_err();
        assert!(matches!(err, SearchError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_language_url() {
        let template = "https://{lang}.wikipedia.org/w/api.php";
        assert!(resolve_endpoint(template, "de").contains("de.wikipedia.org"));
        assert!(resolve_endpoint(template, "en-US").contains("en.wikipedia.org"));
        assert!(resolve_endpoint(template, "all").contains("en.wikipedia.org"));
        assert!(resolve_endpoint(template, "").contains("en.wikipedia.org"));
    }

    #[test]
    fn test_from_settings() {
        let api = ApiSettings {
            lang: "fr".to_string(),
            ..Default::default()
        };
        let builder = QueryBuilder::from_settings(&api);
        assert_eq!(builder.base_url(), "https://fr.wikipedia.org/w/api.php");
    }
}
