//! User agent and header values

/// Descriptive user agent, as the Wikimedia API etiquette asks for.
///
/// An optional suffix (contact address, project URL) is appended.
pub fn user_agent(suffix: Option<&str>) -> String {
    let base = format!("wikisearch-rs/{}", crate::VERSION);
    match suffix.map(str::trim).filter(|s| !s.is_empty()) {
        Some(suffix) => format!("{} {}", base, suffix),
        None => base,
    }
}

/// Standard accept headers for JSON requests
pub fn accept_json() -> &'static str {
    "application/json,text/javascript,*/*;q=0.01"
}
