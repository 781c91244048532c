//! Quoted string reading.
//!
//! A delimiter is escaped when it is preceded by an odd number of
//! backslashes; the escaping backslash is dropped from the result. Any other
//! backslash is kept as written.

use crate::{TokenizerError, TokenizerResult};

/// Reads a string delimited by its first character.
///
/// `input` must start with the opening delimiter. Everything after the
/// closing delimiter is ignored.
///
/// # Examples
///
/// ```
/// # use apconf::tokenizer::literal::read_quoted;
/// assert_eq!(read_quoted(r#""a \" b" trailing"#, '"').unwrap(), "a \" b");
/// ```
#[tracing::instrument(level = "debug")]
pub fn read_quoted(input: &str, delimiter: char) -> TokenizerResult<String> {
    read_quoted_prefix(input, delimiter).map(|(value, _)| value)
}

/// Like [`read_quoted`], but also returns how many bytes of `input` were
/// consumed, closing delimiter included.
pub fn read_quoted_prefix(input: &str, delimiter: char) -> TokenizerResult<(String, usize)> {
    let mut chars = input.char_indices();
    if chars.next().map(|(_, c)| c) != Some(delimiter) {
        return Err(TokenizerError::UnterminatedString {
            input: input.to_string(),
        });
    }

    let mut out = String::new();
    let mut backslashes = 0usize;
    for (index, c) in chars {
        if c == delimiter {
            if backslashes % 2 == 1 {
                out.pop();
                out.push(c);
                backslashes = 0;
                continue;
            }
            return Ok((out, index + c.len_utf8()));
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        out.push(c);
    }

    Err(TokenizerError::UnterminatedString {
        input: input.to_string(),
    })
}

/// True when `input` both starts and ends with a double quote.
pub fn is_fully_quoted(input: &str) -> bool {
    input.len() >= 2 && input.starts_with('"') && input.ends_with('"')
}
