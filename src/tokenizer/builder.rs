//! # Stack Builder
//!
//! The structural pass. Walks preprocessed lines with a cursor and turns each
//! logical line into one [`StructuralToken`]:
//!
//! 1. **Heredoc**: `Name << TERM` up to the `TERM` line
//! 2. **Directive**: `<<include pattern>>`
//! 3. **Tag**: any line starting with `<`
//! 4. **Key-value**: everything else, including backslash continuations
//!
//! A heredoc whose terminator never appears ends the pass quietly with the
//! tokens built so far.

use nom::{
    bytes::complete::take_till1,
    character::complete::multispace0,
    error::context,
    sequence::preceded,
};

use super::{
    comment::strip_trailing_hash_comment,
    continuation::{ends_with_continuation, read_continued_line},
    heredoc::{opens_heredoc, read_heredoc, HeredocRead},
    literal::read_quoted,
    split::Splitter,
    tag::{parse_tag, TagKind},
    token::{ParserResult, StructuralToken},
};
use crate::{TokenizerError, TokenizerOptions, TokenizerResult};

const APACHE_INCLUDE_NAMES: [&str; 2] = ["include", "includeoptional"];

/// Shape of a logical line, decided before any of it is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heredoc,
    Directive,
    Tag,
    KeyValue,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if opens_heredoc(line) {
            LineKind::Heredoc
        } else if line.starts_with("<<") && line.contains(">>") {
            LineKind::Directive
        } else if line.starts_with('<') {
            LineKind::Tag
        } else {
            LineKind::KeyValue
        }
    }
}

pub struct StackBuilder<'a> {
    lines: &'a [String],
    position: usize,
    options: &'a TokenizerOptions,
    splitter: &'a Splitter,
}

impl<'a> StackBuilder<'a> {
    pub fn new(lines: &'a [String], options: &'a TokenizerOptions, splitter: &'a Splitter) -> Self {
        Self {
            lines,
            position: 0,
            options,
            splitter,
        }
    }

    #[tracing::instrument(level = "debug", skip(self), fields(lines = self.lines.len()))]
    pub fn build(mut self) -> TokenizerResult<Vec<StructuralToken>> {
        let lines = self.lines;
        let mut tokens = Vec::new();

        while self.position < lines.len() {
            let line = lines[self.position].trim();
            match LineKind::of(line) {
                LineKind::Heredoc => match read_heredoc(lines, self.position) {
                    HeredocRead::Complete { name, value, end } => {
                        tokens.push(StructuralToken::KeyValue { key: name, value });
                        self.position = end;
                    }
                    HeredocRead::Truncated => return Ok(tokens),
                },
                LineKind::Directive => tokens.push(parse_directive(line)?),
                LineKind::Tag => {
                    let tag = parse_tag(line, self.options.slash_is_directory)?;
                    tokens.push(match tag.kind {
                        TagKind::Opening => StructuralToken::TagOpen {
                            name: tag.name,
                            inline_data: tag.data,
                        },
                        TagKind::Closing => StructuralToken::TagClose { name: tag.name },
                        TagKind::SelfClosing => StructuralToken::TagSelfClose {
                            name: tag.name,
                            inline_data: tag.data,
                        },
                    });
                }
                LineKind::KeyValue => {
                    let token = self.key_value(line)?;
                    tokens.push(token);
                }
            }
            self.position += 1;
        }

        Ok(tokens)
    }

    fn key_value(&mut self, line: &str) -> TokenizerResult<StructuralToken> {
        let mut work = strip_trailing_hash_comment(line).trim().to_string();
        if ends_with_continuation(&work) {
            let (joined, end) = read_continued_line(self.lines, self.position, &work);
            work = joined;
            self.position = end;
        }

        let (name, rest) = self.splitter.split(work.trim_start());
        let name = name.trim();

        if self.options.use_apache_include
            && APACHE_INCLUDE_NAMES.contains(&name.to_lowercase().as_str())
        {
            return Ok(StructuralToken::IncludeDirective {
                pattern: clean_value(&rest)?.unwrap_or_default(),
            });
        }

        Ok(StructuralToken::KeyValue {
            key: name.to_string(),
            value: clean_value(&rest)?,
        })
    }
}

/// Drops a leading `=`, unquotes a quoted value and maps empty values to `None`.
fn clean_value(raw: &str) -> TokenizerResult<Option<String>> {
    let value = raw.trim();
    let value = value.strip_prefix('=').unwrap_or(value).trim();
    let value = if value.starts_with('"') {
        read_quoted(value, '"')?
    } else {
        value.to_string()
    };
    Ok((!value.trim().is_empty()).then_some(value))
}

fn parse_directive_word(input: &str) -> ParserResult<&str> {
    context(
        "directive name",
        preceded(multispace0, take_till1(char::is_whitespace)),
    )(input)
}

/// Parses `<<name args>>`. Only `include` is known.
fn parse_directive(line: &str) -> TokenizerResult<StructuralToken> {
    let inner = line.strip_prefix("<<").unwrap_or(line);
    let (body, trailing) = match inner.rfind(">>") {
        Some(index) => (&inner[..index], inner[index + 2..].trim()),
        None => (inner, ""),
    };
    if !trailing.is_empty() && !trailing.starts_with('#') {
        tracing::warn!(line, "ignoring text after processing directive");
    }

    let (args, name) = parse_directive_word(body).unwrap_or(("", ""));
    if !name.eq_ignore_ascii_case("include") {
        return Err(TokenizerError::UnknownDirective {
            name: name.to_string(),
        });
    }

    Ok(StructuralToken::IncludeDirective {
        pattern: args.trim().to_string(),
    })
}
