//! Settings structures for wikisearch-rs configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default MediaWiki API endpoint; `{lang}` is replaced with the language code
pub const DEFAULT_API_URL: &str = "https://{lang}.wikipedia.org/w/api.php";

/// Default file the raw response is written to
pub const DEFAULT_OUTPUT_PATH: &str = "response.json";

/// Main settings structure matching wikisearch.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub api: ApiSettings,
    pub outgoing: OutgoingSettings,
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (WIKISEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("WIKISEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = lookup("WIKISEARCH_API_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("WIKISEARCH_LANG") {
            self.api.lang = val;
        }
        if let Some(val) = lookup("WIKISEARCH_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
        if let Some(val) = lookup("WIKISEARCH_OUTPUT") {
            self.output.path = PathBuf::from(val);
        }
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        let timeout = self.outgoing.request_timeout;
        if timeout <= 0.0 || Duration::try_from_secs_f64(timeout).is_err() {
            bail!(
                "outgoing.request_timeout must be a positive number, got {}",
                self.outgoing.request_timeout
            );
        }
        if self.output.indent > 16 {
            bail!("output.indent must be at most 16, got {}", self.output.indent);
        }
        if self.api.base_url.trim().is_empty() {
            bail!("api.base_url must not be empty");
        }
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
}

/// Search API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base endpoint URL, optionally containing a `{lang}` placeholder
    pub base_url: String,
    /// Wikipedia language code
    pub lang: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            lang: "en".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Appended to the default user agent
    pub useragent_suffix: Option<String>,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            useragent_suffix: None,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Response file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Where the pretty-printed response is written
    pub path: PathBuf,
    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            indent: 2,
        }
    }
}
