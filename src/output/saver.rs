//! Persisting the raw response as pretty-printed JSON

use crate::error::{Result, SearchError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Writes a response body to disk in canonical pretty form
#[derive(Debug, Clone)]
pub struct ResponseSaver {
    indent: Vec<u8>,
}

impl ResponseSaver {
    /// Create a saver indenting with `indent` spaces per level
    pub fn new(indent: usize) -> Self {
        Self {
            indent: vec![b' '; indent],
        }
    }

    /// Re-parse `raw_body` and render it in canonical form.
    ///
    /// Object keys come out sorted and the text ends with a newline.
    pub fn canonicalize(&self, raw_body: &str) -> Result<String> {
        let json: Value = serde_json::from_str(raw_body)?;

        let mut buf = Vec::with_capacity(raw_body.len() * 2);
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        json.serialize(&mut ser)?;
        buf.push(b'\n');

        Ok(String::from_utf8(buf).expect("serde_json writes only UTF-8"))
    }

    /// Write the canonical form of `raw_body` to `path`, replacing any existing file.
    ///
    /// Nothing is written when the body is not valid JSON.
    pub fn save(&self, path: impl AsRef<Path>, raw_body: &str) -> Result<()> {
        let path = path.as_ref();
        let canonical = self.canonicalize(raw_body)?;

        let save_err = |source| SearchError::Save {
            path: path.to_path_buf(),
            source,
        };

        debug!("Writing {} bytes to {}", canonical.len(), path.display());
        let file = File::create(path).map_err(save_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(canonical.as_bytes()).map_err(save_err)?;
        writer.flush().map_err(save_err)?;

        info!("Saved response to {}", path.display());
        Ok(())
    }
}

impl Default for ResponseSaver {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str =
        r#"{"query":{"search":[{"title":"Oman","snippet":"Oman is a <b>country</b>"}]}}"#;

    #[test]
    fn test_canonical_form() {
        let pretty = ResponseSaver::default().canonicalize(BODY).unwrap();
        let expected = r#"{
  "query": {
    "search": [
      {
        "snippet": "Oman is a <b>country</b>",
        "title": "Oman"
      }
    ]
  }
}
"#;
        assert_eq!(pretty, expected);
    }

    #[test]
    fn test_non_ascii_kept_unescaped() {
        let pretty = ResponseSaver::new(0)
            .canonicalize(r#"{"title":"Zürich","snippet":"\u6771\u4eac 🚆"}"#)
            .unwrap();
        assert_eq!(pretty, "{\n\"snippet\": \"東京 🚆\",\n\"title\": \"Zürich\"\n}\n");
    }

    #[test]
    fn test_custom_indent() {
        let pretty = ResponseSaver::new(4).canonicalize(r#"{"a":[1]}"#).unwrap();
        assert_eq!(pretty, "{\n    \"a\": [\n        1\n    ]\n}\n");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        let body = r#"{"batchcomplete":"","continue":{"sroffset":10},"query":{"searchinfo":{"totalhits":7042},"search":[{"ns":0,"title":"Zürich","pageid":1,"size":1.5e3,"snippet":"a &amp; b","timestamp":null}]}}"#;

        ResponseSaver::default().save(&path, body).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let reread: Value = serde_json::from_str(&written).unwrap();
        let original: Value = serde_json::from_str(body).unwrap();
        assert_eq!(reread, original);
        assert!(written.lines().count() > 1);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        ResponseSaver::default().save(&path, "[]").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_invalid_json_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, "previous").unwrap();

        let err = ResponseSaver::default().save(&path, "not json").unwrap_err();

        assert!(matches!(err, SearchError::Parse(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn test_invalid_json_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");

        assert!(ResponseSaver::default().save(&path, "{").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_path_is_save_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("response.json");

        let err = ResponseSaver::default().save(&path, "{}").unwrap_err();

        match err {
            SearchError::Save { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected save error, got {other}"),
        }
    }
}
