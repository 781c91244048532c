use apconf::{SplitPolicy, Token, TokenKind, Tokenizer, TokenizerError, TokenizerOptions};
use pretty_assertions::assert_eq;
use std::{cell::RefCell, io::Write, rc::Rc};

use crate::{keyvalue, tokenize, tokenize_str};

#[test]
fn test_flat_config_yields_one_keyvalue_per_line() {
    let input = r#"
# Global settings
ServerRoot "/etc/httpd"
Listen 80

// another comment style
Timeout 300
KeepAlive On
"#;
    assert_eq!(
        tokenize_str(input),
        vec![
            keyvalue("ServerRoot", "/etc/httpd"),
            keyvalue("Listen", "80"),
            keyvalue("Timeout", "300"),
            keyvalue("KeepAlive", "On"),
        ]
    );
}

#[test]
fn test_simple_keyvalue() {
    assert_eq!(tokenize_str("Foo bar\n"), vec![keyvalue("Foo", "bar")]);
}

#[test]
fn test_escaped_quote_in_value() {
    assert_eq!(
        tokenize_str(r#"Key = "a \" b""#),
        vec![keyvalue("Key", r#"a " b"#)]
    );
}

#[test]
fn test_heredoc() {
    assert_eq!(
        tokenize_str("KEY << EOF\nline one\nline two\nEOF\n"),
        vec![keyvalue("KEY", "line one\nline two")]
    );
}

#[test]
fn test_heredoc_keeps_comment_markers() {
    assert_eq!(
        tokenize_str("Script <<END\n# shebang-ish\nrun it\nEND\nAfter 1"),
        vec![keyvalue("Script", "# shebang-ish\nrun it"), keyvalue("After", "1")]
    );
}

#[test]
fn test_truncated_heredoc_yields_prior_tokens() {
    assert_eq!(
        tokenize_str("Before 1\nKEY << EOF\nline one\n"),
        vec![keyvalue("Before", "1")]
    );
}

#[test]
fn test_tag_round_trip() {
    assert_eq!(
        tokenize_str("<VirtualHost *:80>\n</VirtualHost>"),
        vec![
            Token::TagOpen {
                name: "VirtualHost".to_string(),
                specname: Some("*:80".to_string()),
            },
            Token::TagClose("VirtualHost".to_string()),
        ]
    );
}

#[test]
fn test_nested_blocks() {
    let input = "<Directory /var/www>\n  <Limit GET>\n    Require all granted\n  </Limit>\n</Directory>";
    let kinds: Vec<TokenKind> = tokenize_str(input).iter().map(Token::kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::TagOpen,
            TokenKind::TagOpen,
            TokenKind::KeyValue,
            TokenKind::TagClose,
            TokenKind::TagClose,
        ]
    );
}

#[test]
fn test_self_close_and_slash_is_directory() {
    assert_eq!(
        tokenize_str("<Foo bar/>"),
        vec![Token::SelfClose {
            name: "Foo".to_string(),
            specname: Some("bar".to_string()),
        }]
    );
    assert_eq!(
        tokenize(
            TokenizerOptions::default()
                .with_slash_is_directory(true)
                .with_string("<Foo bar/>")
        ),
        vec![Token::TagOpen {
            name: "Foo".to_string(),
            specname: Some("bar/".to_string()),
        }]
    );
}

#[test]
fn test_guess_tie_break() {
    assert_eq!(
        tokenize_str("a b=c\nk=v w\nKey = value"),
        vec![
            keyvalue("a", "b=c"),
            keyvalue("k", "v w"),
            keyvalue("Key", "value"),
        ]
    );
}

#[test]
fn test_whitespace_policy_keeps_equals_in_value() {
    assert_eq!(
        tokenize(
            TokenizerOptions::default()
                .with_split_policy(SplitPolicy::Whitespace)
                .with_string("Option a=b")
        ),
        vec![keyvalue("Option", "a=b")]
    );
}

#[test]
fn test_continuation() {
    assert_eq!(
        tokenize_str("LogFormat \"%h %l \\\n    %u\" common\nNext 1"),
        vec![
            keyvalue("LogFormat", "%h %l %u"),
            keyvalue("Next", "1"),
        ]
    );
    assert_eq!(
        tokenize_str("Path C:\\\\\nNext 1"),
        vec![keyvalue("Path", "C:\\\\"), keyvalue("Next", "1")]
    );
}

#[test]
fn test_block_comments() {
    let input = "A 1\n/* disabled\nB 2\n*/\nC 3";
    assert_eq!(tokenize_str(input), vec![keyvalue("A", "1"), keyvalue("C", "3")]);

    let kept = tokenize(TokenizerOptions::default().with_c_comments(false).with_string(input));
    assert_eq!(kept.len(), 5);
}

#[test]
fn test_unknown_directive() {
    let result = Tokenizer::new(TokenizerOptions::default().with_string("<<Exec foo>>"));
    assert_eq!(
        result.unwrap_err(),
        TokenizerError::UnknownDirective {
            name: "Exec".to_string()
        }
    );
}

#[test]
fn test_include_directive_case_insensitive() {
    assert_eq!(
        tokenize_str("<<INCLUDE extra.conf>>"),
        vec![Token::IncludeReq {
            pattern: "extra.conf".to_string()
        }]
    );
}

#[test]
fn test_fatal_errors_are_reported() {
    let unterminated = Tokenizer::new(TokenizerOptions::default().with_string("Key \"open"));
    assert!(matches!(
        unterminated,
        Err(TokenizerError::UnterminatedString { .. })
    ));

    let no_input = Tokenizer::new(TokenizerOptions::default());
    assert_eq!(no_input.unwrap_err(), TokenizerError::NoInputProvided);
}

#[test]
fn test_default_config_alone_is_enough() {
    assert_eq!(
        tokenize(TokenizerOptions::default().with_default_config("A 1\n# note\nB 2")),
        vec![keyvalue("A", "1"), keyvalue("B", "2")]
    );
}

#[test]
fn test_handlers_see_every_token() {
    let names = Rc::new(RefCell::new(Vec::new()));
    let mut tokenizer =
        Tokenizer::new(TokenizerOptions::default().with_string("A 1\nB 2")).unwrap();

    let sink = names.clone();
    tokenizer
        .on_named("keyvalue", move |token| {
            if let Token::KeyValue { name, .. } = token {
                sink.borrow_mut().push(name.clone());
            }
        })
        .unwrap();
    assert!(tokenizer.on_named("bogus", |_| {}).is_err());

    let consumed: Vec<Token> = tokenizer.by_ref().collect();
    assert_eq!(consumed.len(), 2);
    assert_eq!(*names.borrow(), vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn test_options_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"SplitPolicy": "custom", "SplitDelimiter": "\\s*:\\s*", "String": ["name: Bob", "age: 42"]}}"#
    )
    .unwrap();

    let options = TokenizerOptions::from_file(file.path()).unwrap();
    assert_eq!(
        tokenize(options),
        vec![keyvalue("name", "Bob"), keyvalue("age", "42")]
    );
}

#[test]
fn test_json_output_shape() {
    let tokens = tokenize_str("<Dir x>\nK v\n</Dir>");
    let json: Vec<String> = tokens
        .iter()
        .map(|token| serde_json::to_string(token).unwrap())
        .collect();
    assert_eq!(
        json,
        vec![
            r#"{"type":"tagopen","data":{"name":"Dir","specname":"x"}}"#.to_string(),
            r#"{"type":"keyvalue","data":{"name":"K","value":"v"}}"#.to_string(),
            r#"{"type":"tagclose","data":"Dir"}"#.to_string(),
        ]
    );
}
