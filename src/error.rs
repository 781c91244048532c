use thiserror::Error;

use crate::source::SourceError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenizerError {
    // configuration
    #[error("No input to process: one of DefaultConfig, String or ConfigFile is required")]
    NoInputProvided,
    #[error("SplitPolicy set to 'custom' but no SplitDelimiter supplied")]
    MissingDelimiter,
    #[error("Invalid SplitDelimiter {delimiter:?}: {message}")]
    InvalidDelimiter { delimiter: String, message: String },
    #[error("Config error: {message}")]
    Config { message: String },

    // malformed input
    #[error("End of input encountered before end of string: {input}")]
    UnterminatedString { input: String },
    #[error("Tag is missing its closing '>': {line}")]
    UnterminatedTag { line: String },
    #[error("Unknown processing directive found in input: {name}")]
    UnknownDirective { name: String },

    // consumer side
    #[error("Unknown token kind: {kind}")]
    UnknownToken { kind: String },

    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub type TokenizerResult<T> = Result<T, TokenizerError>;

impl TokenizerError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        TokenizerError::Config {
            message: message.into(),
        }
    }

    /// Errors caused by the shape of the input text, as opposed to the
    /// options or the environment.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            TokenizerError::UnterminatedString { .. }
                | TokenizerError::UnterminatedTag { .. }
                | TokenizerError::UnknownDirective { .. }
        )
    }
}
