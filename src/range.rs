//! Range response parsing.
//!
//! The range endpoint answers a prefix query with CRLF-separated lines of
//! the form `SUFFIX:COUNT`, where `SUFFIX` is the 35-character remainder
//! of a digest sharing the queried prefix and `COUNT` is how many times
//! that password was seen in breaches.

use std::str::FromStr;

use thiserror::Error;

use crate::hash::SUFFIX_LEN;

/// A line of the response body that does not parse as `SUFFIX:COUNT`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed range response line: {0:?}")]
pub struct MalformedLine(pub String);

/// One parsed line of a range response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    /// Candidate digest suffix, always 35 characters.
    pub suffix: String,
    /// Breach occurrence count for this candidate.
    pub count: u64,
}

impl FromStr for RangeEntry {
    type Err = MalformedLine;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (suffix, count) = line.split_once(':').ok_or_else(|| MalformedLine(line.to_string()))?;
        if suffix.len() != SUFFIX_LEN {
            return Err(MalformedLine(line.to_string()));
        }
        let count = count.parse::<u64>().map_err(|_| MalformedLine(line.to_string()))?;
        Ok(Self {
            suffix: suffix.to_string(),
            count,
        })
    }
}

/// Scans a range response body for an exact `suffix` match.
///
/// Lines are parsed one at a time and scanning stops at the first match,
/// since the endpoint never repeats a suffix; anything after the matching
/// line is never parsed. An empty final line (trailing CRLF) is skipped.
///
/// # Returns
/// - `Ok(Some(count))` on a match
/// - `Ok(None)` if no candidate matches
/// - `Err(MalformedLine)` if a line before any match fails to parse
pub fn find_occurrences(body: &str, suffix: &str) -> Result<Option<u64>, MalformedLine> {
    for line in body.split("\r\n") {
        if line.is_empty() {
            continue;
        }
        let entry: RangeEntry = line.parse()?;
        if entry.suffix == suffix {
            return Ok(Some(entry.count));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX_A: &str = "0018A45C4D1DEF81644B54AB7F969B88D65";
    const SUFFIX_B: &str = "00D4F6E8FA6EECAD2A3AA415EEC418D38EC";

    #[test]
    fn test_parse_valid_line() {
        let entry: RangeEntry = format!("{SUFFIX_A}:57").parse().unwrap();
        assert_eq!(entry.suffix, SUFFIX_A);
        assert_eq!(entry.count, 57);
    }

    #[test]
    fn test_parse_rejects_missing_colon() {
        let result = SUFFIX_A.parse::<RangeEntry>();
        assert_eq!(result, Err(MalformedLine(SUFFIX_A.to_string())));
    }

    #[test]
    fn test_parse_rejects_short_suffix() {
        let result = "ABC123:4".parse::<RangeEntry>();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_non_decimal_count() {
        let result = format!("{SUFFIX_A}:many").parse::<RangeEntry>();
        assert!(result.is_err());
    }

    #[test]
    fn test_find_occurrences_match() {
        let body = format!("{SUFFIX_A}:1\r\n{SUFFIX_B}:5");
        assert_eq!(find_occurrences(&body, SUFFIX_B), Ok(Some(5)));
    }

    #[test]
    fn test_find_occurrences_no_match() {
        let body = format!("{SUFFIX_A}:1\r\n{SUFFIX_B}:5");
        assert_eq!(
            find_occurrences(&body, "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"),
            Ok(None)
        );
    }

    #[test]
    fn test_find_occurrences_empty_body() {
        assert_eq!(find_occurrences("", SUFFIX_A), Ok(None));
    }

    #[test]
    fn test_find_occurrences_stops_at_first_match() {
        // Garbage after the matching line must never be parsed.
        let body = format!("{SUFFIX_A}:42\r\nnot a range line");
        assert_eq!(find_occurrences(&body, SUFFIX_A), Ok(Some(42)));
    }

    #[test]
    fn test_find_occurrences_malformed_before_match() {
        let body = format!("not a range line\r\n{SUFFIX_A}:42");
        assert!(find_occurrences(&body, SUFFIX_A).is_err());
    }

    #[test]
    fn test_find_occurrences_tolerates_trailing_crlf() {
        let body = format!("{SUFFIX_A}:3\r\n");
        assert_eq!(find_occurrences(&body, SUFFIX_A), Ok(Some(3)));
    }
}
