use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path, str::FromStr};

use crate::{TokenizerError, TokenizerResult};

/// How a key-value line is divided into a directive name and its value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SplitPolicy {
    /// Split at `=` or at the first whitespace, whichever yields the shorter name.
    #[default]
    Guess,
    Whitespace,
    EqualSign,
    /// Split with the regular expression in `SplitDelimiter`.
    Custom,
}

/// Literal input: a newline-delimited string or a list of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringInput {
    Text(String),
    Lines(Vec<String>),
}

impl StringInput {
    pub fn into_lines(self) -> Vec<String> {
        match self {
            StringInput::Text(text) => split_lines(&text),
            StringInput::Lines(lines) => lines,
        }
    }
}

impl From<&str> for StringInput {
    fn from(text: &str) -> Self {
        StringInput::Text(text.to_string())
    }
}

impl From<String> for StringInput {
    fn from(text: String) -> Self {
        StringInput::Text(text)
    }
}

impl From<Vec<String>> for StringInput {
    fn from(lines: Vec<String>) -> Self {
        StringInput::Lines(lines)
    }
}

/// Tokenizer options, keyed the way configuration files spell them.
///
/// Missing keys fall back to their defaults, so a partial document is an
/// overlay on [`TokenizerOptions::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenizerOptions {
    #[serde(default)]
    pub split_policy: SplitPolicy,

    #[serde(default)]
    pub split_delimiter: Option<String>,

    #[serde(default = "default_true", rename = "CComments")]
    pub c_comments: bool,

    #[serde(default)]
    pub slash_is_directory: bool,

    #[serde(default)]
    pub use_apache_include: bool,

    #[serde(default)]
    pub default_config: Option<String>,

    #[serde(default, rename = "String")]
    pub string: Option<StringInput>,

    #[serde(default)]
    pub config_file: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            split_policy: SplitPolicy::default(),
            split_delimiter: None,
            c_comments: default_true(),
            slash_is_directory: false,
            use_apache_include: false,
            default_config: None,
            string: None,
            config_file: None,
        }
    }
}

impl TokenizerOptions {
    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }

    pub fn with_split_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.split_delimiter = Some(delimiter.into());
        self
    }

    pub fn with_c_comments(mut self, enabled: bool) -> Self {
        self.c_comments = enabled;
        self
    }

    pub fn with_slash_is_directory(mut self, enabled: bool) -> Self {
        self.slash_is_directory = enabled;
        self
    }

    pub fn with_apache_include(mut self, enabled: bool) -> Self {
        self.use_apache_include = enabled;
        self
    }

    pub fn with_default_config<S: Into<String>>(mut self, text: S) -> Self {
        self.default_config = Some(text.into());
        self
    }

    pub fn with_string<I: Into<StringInput>>(mut self, input: I) -> Self {
        self.string = Some(input.into());
        self
    }

    pub fn with_config_file<S: Into<String>>(mut self, path: S) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn has_input(&self) -> bool {
        self.default_config.is_some() || self.string.is_some() || self.config_file.is_some()
    }

    /// Loads options from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> TokenizerResult<Self> {
        let file = File::open(path.as_ref())
            .map_err(|e| TokenizerError::config(format!("Failed to open options file: {}", e)))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| TokenizerError::config(format!("Failed to parse options file: {}", e)))
    }
}

/// Parses options from a JSON document.
impl FromStr for TokenizerOptions {
    type Err = TokenizerError;

    fn from_str(s: &str) -> TokenizerResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| TokenizerError::config(format!("Failed to parse options: {}", e)))
    }
}

/// Splits raw text into physical lines on `\n`, dropping a trailing `\r`.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
