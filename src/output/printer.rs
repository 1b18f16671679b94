//! Console presentation of search results

use crate::results::SearchResult;
use std::io::{self, Write};

/// Write one result as `Title:` and `Snippet:` lines followed by a blank line
pub fn write_result<W: Write>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    writeln!(out, "Title: {}", result.title)?;
    writeln!(out, "Snippet: {}", result.snippet)?;
    writeln!(out)
}

/// Write all results in order
pub fn write_results<'a, W, I>(out: &mut W, results: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a SearchResult>,
{
    for result in results {
        write_result(out, result)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_result_layout() {
        let mut out: Vec<u8> = Vec::new();
        write_result(&mut out, &SearchResult::new("Oman", "Oman is a country")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Title: Oman\nSnippet: Oman is a country\n\n"
        );
    }

    #[test]
    fn test_results_in_order() {
        let results = vec![SearchResult::new("A", "a"), SearchResult::new("B", "")];
        let mut out: Vec<u8> = Vec::new();
        write_results(&mut out, &results).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Title: A\nSnippet: a\n\nTitle: B\nSnippet: \n\n"
        );
    }

    #[test]
    fn test_no_results_prints_nothing() {
        let mut out: Vec<u8> = Vec::new();
        write_results(&mut out, &Vec::<SearchResult>::new()).unwrap();
        assert!(out.is_empty());
    }
}
