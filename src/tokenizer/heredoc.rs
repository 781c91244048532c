//! # Heredoc Values
//!
//! ```text
//! Banner << EOF
//!   Welcome
//!   to the server
//! EOF
//! ```
//!
//! The opener carries the directive name (optionally followed by `=`) and the
//! terminator. Body lines are trimmed and joined with `\n`; the terminator
//! line ends the value and is not part of it.

use nom::{
    bytes::complete::{tag, take_until},
    combinator::rest,
    error::context,
    sequence::separated_pair,
};

use super::token::ParserResult;

/// Outcome of reading a heredoc from a line buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum HeredocRead {
    Complete {
        name: String,
        value: Option<String>,
        /// Index of the terminator line.
        end: usize,
    },
    /// The input ended before the terminator was found.
    Truncated,
}

fn parse_heredoc_opener(input: &str) -> ParserResult<(&str, &str)> {
    context(
        "heredoc opener",
        separated_pair(take_until("<<"), tag("<<"), rest),
    )(input)
}

/// `<<` without a closing `>>` on the same line.
pub fn opens_heredoc(line: &str) -> bool {
    line.contains("<<") && !line.contains(">>")
}

/// The trimmed terminator named by an opener line.
pub fn heredoc_terminator(line: &str) -> Option<&str> {
    parse_heredoc_opener(line)
        .ok()
        .map(|(_, (_, terminator))| terminator.trim())
}

fn heredoc_name(left: &str) -> String {
    let name = left.trim();
    match name.strip_suffix('=') {
        Some(stripped) => stripped.trim().to_string(),
        None => name.to_string(),
    }
}

/// Reads the heredoc whose opener is `lines[start]`.
#[tracing::instrument(level = "debug", skip(lines))]
pub fn read_heredoc(lines: &[String], start: usize) -> HeredocRead {
    let Ok((_, (left, right))) = parse_heredoc_opener(&lines[start]) else {
        return HeredocRead::Truncated;
    };
    let terminator = right.trim();

    let mut value = String::new();
    for (end, line) in lines.iter().enumerate().skip(start + 1) {
        let line = line.trim();
        if line == terminator {
            return HeredocRead::Complete {
                name: heredoc_name(left),
                value: (!value.is_empty()).then_some(value),
                end,
            };
        }
        if !value.is_empty() {
            value.push('\n');
        }
        value.push_str(line);
    }

    tracing::warn!(start, terminator, "input ended before heredoc terminator");
    HeredocRead::Truncated
}
