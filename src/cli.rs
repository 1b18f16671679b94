use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use crate::config::Settings;
use crate::error::SearchError;

/// Top-level CLI definition for wikisearch.
#[derive(Parser, Debug)]
#[command(name = "wikisearch", version)]
#[command(about = "Search Wikipedia, print the hits and save the raw response", long_about = None)]
pub struct Cli {
    /// Topic to search for. `topic:<value>` is accepted as well.
    pub topic: OsString,

    /// Path to a settings file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File the pretty-printed response is written to.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Wikipedia language code (e.g. en, de, fr).
    #[arg(short, long)]
    pub lang: Option<String>,

    /// API endpoint; may contain a `{lang}` placeholder.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout (seconds).
    #[arg(long)]
    pub timeout: Option<f64>,

    /// Enable debug logging on stderr.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command line overrides on top of loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(ref path) = self.output {
            settings.output.path = path.clone();
        }
        if let Some(ref lang) = self.lang {
            settings.api.lang = lang.clone();
        }
        if let Some(ref endpoint) = self.endpoint {
            settings.api.base_url = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.outgoing.request_timeout = timeout;
        }
        if self.verbose {
            settings.general.debug = true;
        }
    }

    /// The search topic with any `prefix:` stripped
    pub fn topic(&self) -> anyhow::Result<String> {
        parse_topic(&self.topic)
    }
}

/// Turn the raw topic argument into the text to search for.
///
/// `topic:oman` yields `oman`; an argument without `:` is used as is.
/// Everything after the first `:` is kept verbatim, so `topic:a:b` yields
/// `a:b` and surrounding whitespace reaches the query untouched.
pub fn parse_topic(arg: &OsStr) -> anyhow::Result<String> {
    let arg = arg
        .to_str()
        .ok_or_else(|| SearchError::Encoding(arg.to_string_lossy().into_owned()))?;

    let topic = match arg.split_once(':') {
        Some((_, value)) => value,
        None => arg,
    };

    if topic.is_empty() {
        bail!("no topic given (expected e.g. `topic:oman`)");
    }
    Ok(topic.to_string())
}
