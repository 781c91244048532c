//! # Tokenizer Component
//!
//! Lexical analysis for Apache-style configuration text: nested tags,
//! key-value directives, heredocs and include directives.
//!
//! ## Pipeline
//!
//! ```text
//! Raw text → Preprocessor → StackBuilder → TokenStream → Token → consumer
//! ```
//!
//! 1. The [`LinePreprocessor`](crate::preprocessor::LinePreprocessor) drops
//!    comments and blank lines, leaving heredoc bodies untouched.
//! 2. The [`StackBuilder`](builder::StackBuilder) walks the remaining lines and
//!    recognizes structure, emitting [`StructuralToken`](token::StructuralToken)s.
//! 3. The [`TokenStream`](stream::TokenStream) queues them; includes are spliced
//!    in front of whatever is still queued.
//! 4. The [`Tokenizer`](tokenizer::Tokenizer) translates each structural token
//!    into the public [`Token`](token::Token) and fires the registered handlers.
//!
//! ## Component Structure
//!
//! * [`literal`]: quoted strings with escaped delimiters
//! * [`comment`]: comment markers and trailing-comment stripping
//! * [`continuation`]: backslash line continuation
//! * [`heredoc`]: `<<TERMINATOR` multi-line values
//! * [`split`]: split policies for key-value lines
//! * [`tag`]: tag classification and name/attribute extraction
//! * [`builder`]: the structural pass
//! * [`stream`]: token queue with include splicing
//! * [`token`]: structural and public token types
//! * [`tokenizer`]: the tokenizer instance
//!
//! ## Usage Example
//!
//! ```rust
//! use apconf::{Token, Tokenizer, TokenizerOptions};
//!
//! let options = TokenizerOptions::default().with_string("<VirtualHost *:80>\nServerName example.com\n</VirtualHost>");
//! let tokens: Vec<Token> = Tokenizer::new(options).unwrap().collect();
//! assert_eq!(tokens[2], Token::TagClose("VirtualHost".to_string()));
//! ```

pub mod builder;
pub mod comment;
pub mod continuation;
pub mod heredoc;
pub mod literal;
pub mod split;
pub mod stream;
pub mod tag;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;
