use std::{fmt, path::Path};

use super::{
    builder::StackBuilder,
    split::Splitter,
    stream::TokenStream,
    token::{StructuralToken, Token, TokenKind},
};
use crate::{
    config::split_lines,
    event_registry::TokenEventRegistry,
    preprocessor::{LinePreprocessor, Preprocessor},
    source::{FsSourceLoader, SourceLoader},
    TokenizerError, TokenizerOptions, TokenizerResult,
};

/// A tokenizer instance over one configuration input.
///
/// All input is preprocessed and structurally parsed when the tokenizer is
/// built; pulling tokens afterwards only dequeues. Includes are expanded on
/// request by splicing the included tokens ahead of the queue.
pub struct Tokenizer {
    options: TokenizerOptions,
    splitter: Splitter,
    preprocessor: LinePreprocessor,
    stream: TokenStream,
    handlers: TokenEventRegistry,
    loader: Box<dyn SourceLoader>,
}

impl Tokenizer {
    /// Builds a tokenizer that reads `ConfigFile` and includes from disk.
    pub fn new(options: TokenizerOptions) -> TokenizerResult<Self> {
        Self::with_loader(options, Box::new(FsSourceLoader::new()))
    }

    #[tracing::instrument(level = "debug", skip(options, loader))]
    pub fn with_loader(
        options: TokenizerOptions,
        loader: Box<dyn SourceLoader>,
    ) -> TokenizerResult<Self> {
        if !options.has_input() {
            tracing::error!("{}", TokenizerError::NoInputProvided);
            return Err(TokenizerError::NoInputProvided);
        }
        let splitter = Splitter::from_options(&options).inspect_err(|e| tracing::error!("{}", e))?;
        let preprocessor = LinePreprocessor::new(options.c_comments);

        let mut buffer = Vec::new();
        if let Some(text) = &options.default_config {
            buffer.extend(preprocessor.process(split_lines(text).as_slice()));
        }
        if let Some(input) = &options.string {
            buffer.extend(preprocessor.process(input.clone().into_lines().as_slice()));
        } else if let Some(path) = &options.config_file {
            let text = loader
                .load(Path::new(path))
                .inspect_err(|e| tracing::error!("{}", e))?;
            buffer.extend(preprocessor.process(split_lines(&text).as_slice()));
        }

        let tokens = StackBuilder::new(&buffer, &options, &splitter)
            .build()
            .inspect_err(|e| tracing::error!("{}", e))?;
        tracing::debug!(count = tokens.len(), "tokenized input");

        Ok(Self {
            options,
            splitter,
            preprocessor,
            stream: TokenStream::new(tokens),
            handlers: TokenEventRegistry::new(),
            loader,
        })
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Number of structural tokens still queued.
    pub fn pending(&self) -> usize {
        self.stream.len()
    }

    pub fn on<F>(&mut self, kind: TokenKind, handler: F)
    where
        F: FnMut(&Token) + 'static,
    {
        self.handlers.register(kind, handler);
    }

    pub fn on_named<F>(&mut self, kind: &str, handler: F) -> TokenizerResult<()>
    where
        F: FnMut(&Token) + 'static,
    {
        self.handlers.register_named(kind, handler)
    }

    /// Pulls the next token, firing the handlers registered for its kind.
    ///
    /// Returns [`Token::End`] once the stream is exhausted.
    pub fn next_token(&mut self) -> Token {
        let token = self.stream.consume().map_or(Token::End, Token::from);
        self.handlers.emit(&token);
        token
    }

    /// Splices the tokens of `text` in front of the queue, followed by an
    /// `includeend` marker. Returns how many tokens were spliced, marker excluded.
    pub fn include_text(&mut self, text: &str) -> TokenizerResult<usize> {
        self.include_lines(&split_lines(text))
    }

    pub fn include_lines(&mut self, lines: &[String]) -> TokenizerResult<usize> {
        let tokens = self.tokenize_lines(lines)?;
        let count = tokens.len();
        self.stream.splice(tokens);
        Ok(count)
    }

    /// Resolves `pattern` through the loader and splices every matching
    /// source, in order, as one include.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn expand_include(&mut self, pattern: &str) -> TokenizerResult<usize> {
        let paths = self
            .loader
            .resolve(pattern)
            .inspect_err(|e| tracing::error!("{}", e))?;
        if paths.is_empty() {
            tracing::debug!(pattern, "include pattern matched nothing");
        }

        let mut tokens = Vec::new();
        for path in &paths {
            let text = self.loader.load(path)?;
            tokens.extend(self.tokenize_lines(&split_lines(&text))?);
        }

        let count = tokens.len();
        self.stream.splice(tokens);
        tracing::debug!(pattern, sources = paths.len(), count, "spliced include");
        Ok(count)
    }

    fn tokenize_lines(&self, lines: &[String]) -> TokenizerResult<Vec<StructuralToken>> {
        let buffer = self.preprocessor.process(lines);
        StackBuilder::new(&buffer, &self.options, &self.splitter)
            .build()
            .inspect_err(|e| tracing::error!("{}", e))
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    /// Yields tokens up to, not including, `end`.
    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::End => None,
            token => Some(token),
        }
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("options", &self.options)
            .field("stream", &self.stream)
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}
