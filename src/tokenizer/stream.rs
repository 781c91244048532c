use std::collections::VecDeque;

use super::token::StructuralToken;

/// FIFO queue of structural tokens.
///
/// Includes are spliced in front of the queued tokens, followed by an
/// [`StructuralToken::IncludeEnd`] marker, so the parent resumes exactly
/// where it left off once the included tokens are consumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    queue: VecDeque<StructuralToken>,
}

impl TokenStream {
    pub fn new(tokens: Vec<StructuralToken>) -> Self {
        Self {
            queue: tokens.into(),
        }
    }

    /// Pops the front token, or `None` once the stream is exhausted.
    pub fn consume(&mut self) -> Option<StructuralToken> {
        self.queue.pop_front()
    }

    pub fn peek(&self) -> Option<&StructuralToken> {
        self.queue.front()
    }

    /// Places `tokens` and an `IncludeEnd` marker ahead of everything queued.
    #[tracing::instrument(level = "debug", skip(self, tokens), fields(count = tokens.len()))]
    pub fn splice(&mut self, tokens: Vec<StructuralToken>) {
        self.queue.push_front(StructuralToken::IncludeEnd);
        for token in tokens.into_iter().rev() {
            self.queue.push_front(token);
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
