//! Tokenizer for Apache-style configuration text.
//!
//! Turns nested `<Tag>` blocks, key-value directives, heredocs and include
//! directives into a flat stream of [`Token`]s, which a consumer pulls one at
//! a time. Includes are expanded on request and spliced in front of the rest
//! of the stream.

pub mod config;
pub mod error;
pub mod event_registry;
pub mod preprocessor;
pub mod source;
pub mod tokenizer;

// Re-exports
pub use config::{SplitPolicy, StringInput, TokenizerOptions};
pub use error::*;
pub use event_registry::TokenEventRegistry;
pub use source::{FsSourceLoader, MemorySourceLoader, SourceError, SourceLoader};
pub use tokenizer::token::{StructuralToken, Token, TokenKind};
pub use tokenizer::tokenizer::Tokenizer;
