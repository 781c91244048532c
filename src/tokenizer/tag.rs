//! # Tag Classification
//!
//! A tag line is `<content>` with optional trailing text. The content decides
//! the kind of tag:
//!
//! * **Closing**: starts with `/` (`</VirtualHost>`)
//! * **Self-closing**: ends with `/` (`<Foo bar/>`), unless `SlashIsDirectory`
//!   is set, in which case a trailing slash is read as part of a path
//! * **Opening**: everything else (`<VirtualHost *:80>`)
//!
//! The tag name is a quoted string or the first whitespace-delimited word;
//! whatever follows it is the inline data (the `specname` of the public token).

use nom::{bytes::complete::take_till, error::context};

use super::{
    literal::{is_fully_quoted, read_quoted, read_quoted_prefix},
    token::ParserResult,
};
use crate::{TokenizerError, TokenizerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TagKind {
    Opening,
    Closing,
    SelfClosing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub kind: TagKind,
    pub name: String,
    pub data: Option<String>,
}

fn parse_bare_name(input: &str) -> ParserResult<&str> {
    context("tag name", take_till(char::is_whitespace))(input)
}

/// Text between the first `<` and the last `>`.
pub fn tag_contents(line: &str) -> TokenizerResult<&str> {
    match (line.find('<'), line.rfind('>')) {
        (Some(open), Some(close)) if open < close => Ok(&line[open + 1..close]),
        _ => Err(TokenizerError::UnterminatedTag {
            line: line.to_string(),
        }),
    }
}

pub fn classify(contents: &str, slash_is_directory: bool) -> TagKind {
    if contents.starts_with('/') {
        TagKind::Closing
    } else if contents.ends_with('/') && !slash_is_directory {
        TagKind::SelfClosing
    } else {
        TagKind::Opening
    }
}

/// Splits `contents` into the tag name and the text after it.
pub fn tag_name(contents: &str) -> TokenizerResult<(String, &str)> {
    if contents.starts_with('"') {
        let (name, consumed) = read_quoted_prefix(contents, '"')?;
        return Ok((name.trim().to_string(), &contents[consumed..]));
    }
    let (rest, name) = parse_bare_name(contents).unwrap_or(("", contents));
    Ok((name.trim().to_string(), rest))
}

/// Classifies a tag line and extracts its name and inline data.
#[tracing::instrument(level = "debug")]
pub fn parse_tag(line: &str, slash_is_directory: bool) -> TokenizerResult<Tag> {
    let mut contents = tag_contents(line)?;
    let kind = classify(contents, slash_is_directory);
    if kind == TagKind::Closing {
        contents = &contents[1..];
    }

    let (mut name, rest) = tag_name(contents)?;

    // stray empty quotes ahead of the data
    let mut data = rest.trim().to_string();
    if let Some(stripped) = data.strip_prefix("\"\"") {
        data = stripped.trim().to_string();
    }

    if kind == TagKind::SelfClosing {
        if let Some(stripped) = data.strip_suffix('/') {
            data = stripped.trim_end().to_string();
        }
        if let Some(stripped) = name.strip_suffix('/') {
            name = stripped.to_string();
        }
    }

    let data = if is_fully_quoted(&data) {
        read_quoted(&data, '"')?
    } else {
        data.trim().to_string()
    };

    Ok(Tag {
        kind,
        name,
        data: (!data.trim().is_empty()).then_some(data),
    })
}
