//! # Comment Handling
//!
//! Three comment conventions are recognized:
//!
//! * **Hash Comments**: `# text`, whole-line or trailing
//! * **Slash Comments**: `// text`, whole-line only
//! * **Block Comments**: `/* text */`, whole-line runs (optional) or trailing a value
//!
//! A `#` preceded by a backslash is content, not a comment marker.

use lazy_static::lazy_static;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::multispace0,
    error::context,
    sequence::preceded,
};
use regex::Regex;

use super::token::ParserResult;

lazy_static! {
    static ref TRAILING_BLOCK_COMMENT: Regex = Regex::new(r"/\*.*\*/$").unwrap();
    static ref TRAILING_HASH_COMMENT: Regex = Regex::new(r"#.*$").unwrap();
    static ref ESCAPED_HASH: Regex = Regex::new(r"\\#").unwrap();
}

fn parse_line_comment_marker(input: &str) -> ParserResult<&str> {
    context(
        "line comment",
        preceded(multispace0, alt((tag("//"), tag("#")))),
    )(input)
}

fn parse_block_comment_opener(input: &str) -> ParserResult<&str> {
    context("block comment", preceded(multispace0, tag("/*")))(input)
}

/// A line holding nothing but a `#` or `//` comment.
pub fn is_line_comment(line: &str) -> bool {
    parse_line_comment_marker(line).is_ok()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Lines the preprocessor drops outright.
pub fn is_comment_or_blank(line: &str) -> bool {
    is_blank(line) || is_line_comment(line)
}

pub fn opens_block_comment(line: &str) -> bool {
    parse_block_comment_opener(line).is_ok()
}

pub fn closes_block_comment(line: &str) -> bool {
    line.trim_end().ends_with("*/")
}

/// Returns the part of `line` before the first unescaped `#`.
///
/// Escaped markers (`\#`) are kept exactly as written.
pub fn strip_trailing_hash_comment(line: &str) -> &str {
    let mut previous = None;
    for (index, c) in line.char_indices() {
        if c == '#' && previous != Some('\\') {
            return &line[..index];
        }
        previous = Some(c);
    }
    line
}

/// Removes a trailing `/* ... */` or `# ...` comment from a directive value.
///
/// A hash comment is only removed when the value holds no escaped `\#`.
pub fn strip_trailing_value_comment(value: &str) -> String {
    if TRAILING_BLOCK_COMMENT.is_match(value) {
        TRAILING_BLOCK_COMMENT
            .replace(value, "")
            .trim()
            .to_string()
    } else if TRAILING_HASH_COMMENT.is_match(value) && !ESCAPED_HASH.is_match(value) {
        TRAILING_HASH_COMMENT.replace(value, "").trim().to_string()
    } else {
        value.to_string()
    }
}
