//! Extraction of search results from a raw API response

use super::sanitize::strip_tags;
use super::types::SearchResult;
use crate::error::{Result, SearchError};
use serde_json::{Map, Value};

/// Parse a raw response body and return its results lazily.
///
/// The body must be JSON with an array at `query.search`; anything else
/// fails here, before any result is produced.
pub fn extract(raw_body: &str) -> Result<SearchResults> {
    let mut json: Value = serde_json::from_str(raw_body)?;

    let search = json
        .get_mut("query")
        .ok_or_else(|| SearchError::Schema("missing field `query`".to_string()))?
        .get_mut("search")
        .ok_or_else(|| SearchError::Schema("missing field `query.search`".to_string()))?
        .take();

    match search {
        Value::Array(items) => Ok(SearchResults::new(items)),
        other => Err(SearchError::Schema(format!(
            "`query.search` must be an array, found {}",
            type_name(&other)
        ))),
    }
}

/// Iterator over the results of one response, in API order.
///
/// Yields `Err(SearchError::Schema)` for the first malformed element and
/// ends there; the elements after it are never read.
#[derive(Debug)]
pub struct SearchResults {
    items: std::vec::IntoIter<Value>,
    index: usize,
    failed: bool,
}

impl SearchResults {
    fn new(items: Vec<Value>) -> Self {
        Self {
            items: items.into_iter(),
            index: 0,
            failed: false,
        }
    }

    /// Number of elements not yet consumed
    pub fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            self.items.len()
        }
    }

    fn parse_item(index: usize, item: &Value) -> Result<SearchResult> {
        let object = item.as_object().ok_or_else(|| {
            SearchError::Schema(format!(
                "search result {} must be an object, found {}",
                index,
                type_name(item)
            ))
        })?;

        let title = string_field(object, index, "title")?;
        let snippet = string_field(object, index, "snippet")?;

        Ok(SearchResult::new(title, strip_tags(snippet)))
    }
}

impl Iterator for SearchResults {
    type Item = Result<SearchResult>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.items.next()?;
        let parsed = Self::parse_item(self.index, &item);
        self.index += 1;

        if parsed.is_err() {
            self.failed = true;
        }
        Some(parsed)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl std::iter::FusedIterator for SearchResults {}

fn string_field<'a>(object: &'a Map<String, Value>, index: usize, name: &str) -> Result<&'a str> {
    match object.get(name) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(SearchError::Schema(format!(
            "search result {}: field `{}` must be a string, found {}",
            index,
            name,
            type_name(other)
        ))),
        None => Err(SearchError::Schema(format!(
            "search result {}: missing field `{}`",
            index, name
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
