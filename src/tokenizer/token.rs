use nom::{error::VerboseError, IResult};
use serde::Serialize;

/// Internal unit of recognized structure, queued in the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralToken {
    TagOpen {
        name: String,
        inline_data: Option<String>,
    },
    TagClose {
        name: String,
    },
    TagSelfClose {
        name: String,
        inline_data: Option<String>,
    },
    KeyValue {
        key: String,
        value: Option<String>,
    },
    IncludeDirective {
        pattern: String,
    },
    /// Marks where a spliced include ends.
    IncludeEnd,
}

/// A token as seen by the consumer.
///
/// `TagClose` carries the bare tag name rather than a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Token {
    TagOpen {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        specname: Option<String>,
    },
    TagClose(String),
    SelfClose {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        specname: Option<String>,
    },
    KeyValue {
        name: String,
        value: Option<String>,
    },
    IncludeReq {
        pattern: String,
    },
    IncludeEnd,
    End,
}

/// The wire names of the public token kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum TokenKind {
    TagOpen,
    TagClose,
    SelfClose,
    KeyValue,
    IncludeReq,
    IncludeEnd,
    End,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::TagOpen { .. } => TokenKind::TagOpen,
            Token::TagClose(_) => TokenKind::TagClose,
            Token::SelfClose { .. } => TokenKind::SelfClose,
            Token::KeyValue { .. } => TokenKind::KeyValue,
            Token::IncludeReq { .. } => TokenKind::IncludeReq,
            Token::IncludeEnd => TokenKind::IncludeEnd,
            Token::End => TokenKind::End,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Token::End)
    }
}

impl From<StructuralToken> for Token {
    fn from(token: StructuralToken) -> Self {
        match token {
            StructuralToken::TagOpen { name, inline_data } => Token::TagOpen {
                name,
                specname: inline_data,
            },
            StructuralToken::TagClose { name } => Token::TagClose(name),
            StructuralToken::TagSelfClose { name, inline_data } => Token::SelfClose {
                name,
                specname: inline_data,
            },
            StructuralToken::KeyValue { key, value } => Token::KeyValue { name: key, value },
            StructuralToken::IncludeDirective { pattern } => Token::IncludeReq { pattern },
            StructuralToken::IncludeEnd => Token::IncludeEnd,
        }
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;
