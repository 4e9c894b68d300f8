//! Query tokenizer.
//!
//! Splitting a query is two explicit steps:
//! 1. [`find_marker`] locates the first `!token`
//! 2. [`strip_marker`] removes exactly that token from the query
//!
//! Any later `!tokens` are left in the search term as literal text.

/// The first `!token` of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Text after the `!`, as typed.
    pub token: &'a str,
    /// Byte offset of the `!`.
    pub start: usize,
    /// Byte offset just past the token.
    pub end: usize,
}

impl Marker<'_> {
    /// The candidate trigger, lower-cased.
    pub fn trigger(&self) -> String {
        self.token.to_lowercase()
    }
}

/// A query split into candidate trigger and search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Lower-cased candidate trigger, if the query has a marker.
    pub trigger: Option<String>,
    /// Query with the first marker removed, trimmed.
    pub search_term: String,
}

/// Find the first `!` followed by at least one non-whitespace character.
///
/// A bare `!` (followed by whitespace or the end of input) is skipped.
pub fn find_marker(query: &str) -> Option<Marker<'_>> {
    let mut from = 0;
    while let Some(offset) = query[from..].find('!') {
        let start = from + offset;
        let rest = &query[start + 1..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if len > 0 {
            return Some(Marker {
                token: &rest[..len],
                start,
                end: start + 1 + len,
            });
        }
        from = start + 1;
    }
    None
}

/// Remove `marker` and one following run of whitespace, then trim.
pub fn strip_marker(query: &str, marker: &Marker<'_>) -> String {
    let before = &query[..marker.start];
    let after = query[marker.end..].trim_start();
    format!("{}{}", before, after).trim().to_string()
}

/// Split a query into candidate trigger and search term.
pub fn parse_query(query: &str) -> ParsedQuery {
    let query = query.trim();
    match find_marker(query) {
        Some(marker) => ParsedQuery {
            trigger: Some(marker.trigger()),
            search_term: strip_marker(query, &marker),
        },
        None => ParsedQuery {
            trigger: None,
            search_term: query.to_string(),
        },
    }
}
