//! Snippet sanitizing

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest `<...>` run on a single line
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("valid tag pattern"));

/// Remove every tag-shaped substring from `text`.
///
/// Textual only: entities such as `&amp;` are kept verbatim and a `>`
/// inside an attribute ends the tag early.
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}
