//! Path filters for search playlists
//!
//! A filter string takes one of three forms:
//! - a delimited regular expression with optional flags, e.g. `/live/i` or `#^rock/#`
//! - a glob when it contains `*` or `?`, e.g. `**/best of*`
//! - otherwise a plain substring, e.g. `Beatles/`
//!
//! Every form matches anywhere in the path unless the regex anchors itself.
//!
//! Regex flags follow PCRE: `i`, `m`, `s`, `x` and `U` (ungreedy) map to the
//! same regex options, `A` anchors the match at the start of the path, and
//! `D`, `u` and `n` are accepted without changing what matches.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

const REGEX_FLAGS: &str = "imsxuADUn";

/// A compiled path filter
#[derive(Debug, Clone)]
pub enum PathPattern {
    Regex(Regex),
    Substring(String),
}

impl PathPattern {
    /// Compile a filter string
    pub fn parse(pattern: &str) -> Result<Self> {
        if let Some((body, flags)) = split_delimited(pattern) {
            let extended = flags.contains('x');
            let expr = if flags.contains('A') {
                // The newline ends a trailing comment in extended mode
                format!("\\A(?:{body}{})", if extended { "\n" } else { "" })
            } else {
                body.to_string()
            };
            let regex = RegexBuilder::new(&expr)
                .case_insensitive(flags.contains('i'))
                .multi_line(flags.contains('m'))
                .dot_matches_new_line(flags.contains('s'))
                .ignore_whitespace(extended)
                .swap_greed(flags.contains('U'))
                .build()
                .map_err(|source| Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            return Ok(Self::Regex(regex));
        }

        if pattern.contains(['*', '?']) {
            let regex = Regex::new(&glob_to_regex(pattern)).map_err(|source| {
                Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                }
            })?;
            return Ok(Self::Regex(regex));
        }

        Ok(Self::Substring(pattern.to_string()))
    }

    /// Test a `/`-separated path against this filter
    pub fn is_match(&self, path: &str) -> bool {
        match self {
            Self::Regex(regex) => regex.is_match(path),
            Self::Substring(needle) => path.contains(needle.as_str()),
        }
    }
}

/// Compile a list of filter strings
pub fn parse_all(patterns: &[String]) -> Result<Vec<PathPattern>> {
    patterns.iter().map(|p| PathPattern::parse(p)).collect()
}

/// True when any filter in the list matches
pub fn any_match(patterns: &[PathPattern], path: &str) -> bool {
    patterns.iter().any(|p| p.is_match(path))
}

/// Split `/body/flags` into its body and flags, if the string is delimited
///
/// The shortest body wins, so `/a/i` reads as body `a` with flag `i`.
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let flag_count = pattern
        .chars()
        .rev()
        .take_while(|c| REGEX_FLAGS.contains(*c))
        .count();

    (0..=flag_count).rev().find_map(|k| {
        let (delimited, flags) = pattern.split_at(pattern.len() - k);
        let mut chars = delimited.chars();
        let start = chars.next()?;
        let end = chars.next_back()?;
        if delimited.chars().count() < 3 || !delimiters_pair(start, end) {
            return None;
        }
        let body = &delimited[start.len_utf8()..delimited.len() - end.len_utf8()];
        Some((body, flags))
    })
}

fn delimiters_pair(start: char, end: char) -> bool {
    match (start, end) {
        ('{', '}') | ('(', ')') | ('[', ']') | ('<', '>') => true,
        _ if start == end => {
            !(start.is_alphanumeric() || start.is_whitespace() || matches!(start, '\\' | '*' | '?'))
        }
        _ => false,
    }
}

/// Translate a glob into an unanchored regex
fn glob_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() * 2);
    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str(".*");
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    out
}
