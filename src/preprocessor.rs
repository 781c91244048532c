//! # Preprocessor
//!
//! Normalizes raw configuration lines before the structural pass.
//!
//! ## Position in the Pipeline
//!
//! ```text
//! Raw lines → Preprocessor → StackBuilder → TokenStream
//! ```
//!
//! ## Preprocessing Operations
//!
//! * **Comment Removal**: drops whole-line `#` and `//` comments, and with
//!   `CComments` enabled, whole-line `/* ... */` runs
//! * **Blank Line Removal**: drops blank lines, except a blank line that ends
//!   a backslash continuation
//! * **Heredoc Preservation**: copies heredoc bodies verbatim, comment markers
//!   included
//!
//! An unterminated heredoc or block comment ends preprocessing with the lines
//! kept so far.

use crate::tokenizer::{
    comment::{closes_block_comment, is_blank, is_comment_or_blank, opens_block_comment},
    continuation::ends_with_continuation,
    heredoc::{heredoc_terminator, opens_heredoc},
};

/// A trait for preprocessing different types of input
pub trait Preprocessor<T, U = T> {
    /// Process the input of type T and return the processed result
    fn process(&self, input: T) -> U;
}

/// Line-level comment and blank-line normalizer.
#[derive(Debug, Clone)]
pub struct LinePreprocessor {
    c_comments: bool,
}

impl Default for LinePreprocessor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LinePreprocessor {
    pub fn new(c_comments: bool) -> Self {
        Self { c_comments }
    }

    /// Copies a heredoc from its opener at `start` through its terminator.
    /// Returns the index of the terminator, or `None` if the input ran out.
    fn copy_heredoc(&self, input: &[String], start: usize, output: &mut Vec<String>) -> Option<usize> {
        let terminator = heredoc_terminator(&input[start]).unwrap_or_default();
        output.push(input[start].clone());

        for (index, line) in input.iter().enumerate().skip(start + 1) {
            output.push(line.clone());
            if line.trim() == terminator {
                return Some(index);
            }
        }
        None
    }

    /// Index of the line closing the block comment opened at `start`.
    fn skip_block_comment(&self, input: &[String], start: usize) -> Option<usize> {
        if closes_block_comment(&input[start]) {
            return Some(start);
        }
        input
            .iter()
            .enumerate()
            .skip(start + 1)
            .find(|(_, line)| closes_block_comment(line))
            .map(|(index, _)| index)
    }
}

impl Preprocessor<&[String], Vec<String>> for LinePreprocessor {
    #[tracing::instrument(level = "debug", skip(self, input), fields(lines = input.len()))]
    fn process(&self, input: &[String]) -> Vec<String> {
        let mut output = Vec::new();
        let mut position = 0;

        while position < input.len() {
            let current = &input[position];

            if is_comment_or_blank(current) {
                let continues = position > 0 && ends_with_continuation(input[position - 1].trim_end());
                if is_blank(current) && continues {
                    output.push(current.clone());
                }
            } else if opens_heredoc(current) {
                match self.copy_heredoc(input, position, &mut output) {
                    Some(end) => position = end,
                    None => {
                        tracing::warn!(start = position, "input ended inside a heredoc");
                        return output;
                    }
                }
            } else if self.c_comments && opens_block_comment(current) {
                match self.skip_block_comment(input, position) {
                    Some(end) => position = end,
                    None => {
                        tracing::warn!(start = position, "input ended inside a block comment");
                        return output;
                    }
                }
            } else {
                output.push(current.clone());
            }

            position += 1;
        }

        output
    }
}
