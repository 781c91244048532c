use std::{collections::HashMap, fmt, str::FromStr};

use crate::{
    tokenizer::token::{Token, TokenKind},
    TokenizerError, TokenizerResult,
};

pub type TokenHandler = Box<dyn FnMut(&Token)>;

/// Handlers registered per token kind, fired synchronously as tokens are pulled.
#[derive(Default)]
pub struct TokenEventRegistry {
    handlers: HashMap<TokenKind, Vec<TokenHandler>>,
}

impl TokenEventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, kind: TokenKind, handler: F)
    where
        F: FnMut(&Token) + 'static,
    {
        self.handlers
            .entry(kind)
            .or_default()
            .push(Box::new(handler));
    }

    /// Registers by wire name (`"tagopen"`, `"keyvalue"`, ...).
    pub fn register_named<F>(&mut self, kind: &str, handler: F) -> TokenizerResult<()>
    where
        F: FnMut(&Token) + 'static,
    {
        let kind = TokenKind::from_str(kind).map_err(|_| TokenizerError::UnknownToken {
            kind: kind.to_string(),
        })?;
        self.register(kind, handler);
        Ok(())
    }

    /// Calls every handler registered for the token's kind, in registration order.
    pub fn emit(&mut self, token: &Token) {
        if let Some(handlers) = self.handlers.get_mut(&token.kind()) {
            for handler in handlers.iter_mut() {
                handler(token);
            }
        }
    }

    pub fn handler_count(&self, kind: TokenKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    pub fn clear(&mut self, kind: TokenKind) {
        self.handlers.remove(&kind);
    }
}

impl fmt::Debug for TokenEventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<_> = self
            .handlers
            .iter()
            .map(|(kind, handlers)| (*kind, handlers.len()))
            .collect();
        counts.sort();
        f.debug_struct("TokenEventRegistry")
            .field("handlers", &counts)
            .finish()
    }
}
