//! # Split Policies
//!
//! Divides a key-value line into a directive name and its raw value.
//!
//! | policy       | split point                                      |
//! |--------------|--------------------------------------------------|
//! | `guess`      | `=` or first whitespace, whichever gives the shorter name |
//! | `whitespace` | first whitespace character                       |
//! | `equalsign`  | first `=` (the `=` stays at the head of the value) |
//! | `custom`     | first match of the `SplitDelimiter` regex        |
//!
//! With `guess`, equal-length candidates keep the `=` split.

use regex::Regex;

use super::comment::strip_trailing_value_comment;
use crate::{config::SplitPolicy, TokenizerError, TokenizerOptions, TokenizerResult};

/// A split policy with its delimiter compiled.
#[derive(Debug, Clone)]
pub struct Splitter {
    policy: SplitPolicy,
    delimiter: Option<Regex>,
}

impl Splitter {
    pub fn new(policy: SplitPolicy, delimiter: Option<&str>) -> TokenizerResult<Self> {
        let delimiter = match (policy, delimiter) {
            (SplitPolicy::Custom, None) => return Err(TokenizerError::MissingDelimiter),
            (SplitPolicy::Custom, Some(pattern)) => Some(Regex::new(pattern).map_err(|e| {
                TokenizerError::InvalidDelimiter {
                    delimiter: pattern.to_string(),
                    message: e.to_string(),
                }
            })?),
            _ => None,
        };
        Ok(Self { policy, delimiter })
    }

    pub fn from_options(options: &TokenizerOptions) -> TokenizerResult<Self> {
        Self::new(options.split_policy, options.split_delimiter.as_deref())
    }

    /// Splits `line` into `(name, value)`.
    ///
    /// The name is returned as found; the value is trimmed and has any
    /// trailing comment removed.
    pub fn split<'a>(&self, line: &'a str) -> (&'a str, String) {
        let (name, rest) = match (self.policy, &self.delimiter) {
            (SplitPolicy::Guess, _) => split_guess(line),
            (SplitPolicy::Whitespace, _) => split_at_whitespace(line),
            (SplitPolicy::EqualSign, _) => split_at_equals(line),
            (SplitPolicy::Custom, Some(delimiter)) => match delimiter.find(line) {
                Some(m) => (&line[..m.start()], &line[m.end()..]),
                None => (line, ""),
            },
            // construction rejects custom without a delimiter
            (SplitPolicy::Custom, None) => split_guess(line),
        };
        (name, strip_trailing_value_comment(rest.trim()))
    }
}

fn split_at_whitespace(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(index) => line.split_at(index),
        None => (line, ""),
    }
}

fn split_at_equals(line: &str) -> (&str, &str) {
    match line.find('=') {
        Some(index) => line.split_at(index),
        None => (line, ""),
    }
}

fn split_guess(line: &str) -> (&str, &str) {
    if !line.contains('=') {
        return split_at_whitespace(line);
    }
    let by_equals = split_at_equals(line);
    let by_whitespace = split_at_whitespace(line);
    if by_equals.0.trim().chars().count() <= by_whitespace.0.trim().chars().count() {
        by_equals
    } else {
        by_whitespace
    }
}
