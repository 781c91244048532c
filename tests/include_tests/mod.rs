use apconf::{
    FsSourceLoader, MemorySourceLoader, SourceError, Token, Tokenizer, TokenizerError,
    TokenizerOptions,
};
use pretty_assertions::assert_eq;
use std::fs;

use crate::keyvalue;

fn include_req(pattern: &str) -> Token {
    Token::IncludeReq {
        pattern: pattern.to_string(),
    }
}

/// Pulls every token, expanding include requests as they arrive.
fn drain_expanding(tokenizer: &mut Tokenizer) -> Result<Vec<Token>, TokenizerError> {
    let mut out = Vec::new();
    loop {
        let token = tokenizer.next_token();
        if token.is_end() {
            return Ok(out);
        }
        if let Token::IncludeReq { pattern } = &token {
            tokenizer.expand_include(pattern)?;
        }
        out.push(token);
    }
}

#[test]
fn test_splice_orders_include_before_marker_before_rest() {
    let loader = MemorySourceLoader::new().with_source("extra.conf", "Inner 1\nInner 2");
    let options = TokenizerOptions::default().with_string("Before 0\n<<include extra.conf>>\nAfter 3");
    let mut tokenizer = Tokenizer::with_loader(options, Box::new(loader)).unwrap();

    assert_eq!(
        drain_expanding(&mut tokenizer).unwrap(),
        vec![
            keyvalue("Before", "0"),
            include_req("extra.conf"),
            keyvalue("Inner", "1"),
            keyvalue("Inner", "2"),
            Token::IncludeEnd,
            keyvalue("After", "3"),
        ]
    );
}

#[test]
fn test_nested_includes() {
    let loader = MemorySourceLoader::new()
        .with_source("outer.conf", "O 1\n<<include inner.conf>>\nO 2")
        .with_source("inner.conf", "I 1");
    let options = TokenizerOptions::default().with_string("<<include outer.conf>>\nTail 9");
    let mut tokenizer = Tokenizer::with_loader(options, Box::new(loader)).unwrap();

    assert_eq!(
        drain_expanding(&mut tokenizer).unwrap(),
        vec![
            include_req("outer.conf"),
            keyvalue("O", "1"),
            include_req("inner.conf"),
            keyvalue("I", "1"),
            Token::IncludeEnd,
            keyvalue("O", "2"),
            Token::IncludeEnd,
            keyvalue("Tail", "9"),
        ]
    );
}

#[test]
fn test_include_inside_block() {
    let loader = MemorySourceLoader::new().with_source("vhost.conf", "ServerName example.com");
    let options = TokenizerOptions::default()
        .with_apache_include(true)
        .with_string("<VirtualHost *:80>\nInclude vhost.conf\n</VirtualHost>");
    let mut tokenizer = Tokenizer::with_loader(options, Box::new(loader)).unwrap();

    assert_eq!(
        drain_expanding(&mut tokenizer).unwrap(),
        vec![
            Token::TagOpen {
                name: "VirtualHost".to_string(),
                specname: Some("*:80".to_string()),
            },
            include_req("vhost.conf"),
            keyvalue("ServerName", "example.com"),
            Token::IncludeEnd,
            Token::TagClose("VirtualHost".to_string()),
        ]
    );
}

#[test]
fn test_missing_include_source() {
    let loader = MemorySourceLoader::new();
    let options = TokenizerOptions::default().with_string("<<include gone.conf>>");
    let mut tokenizer = Tokenizer::with_loader(options, Box::new(loader)).unwrap();

    assert_eq!(tokenizer.next_token(), include_req("gone.conf"));
    // A literal path that matches nothing splices only the marker.
    assert_eq!(tokenizer.expand_include("gone.conf").unwrap(), 0);
    assert_eq!(tokenizer.next_token(), Token::IncludeEnd);
    assert_eq!(tokenizer.next_token(), Token::End);
}

#[test]
fn test_filesystem_includes_with_glob() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("conf.d")).unwrap();
    fs::write(dir.path().join("conf.d/b.conf"), "B 2\n").unwrap();
    fs::write(dir.path().join("conf.d/a.conf"), "A 1\n").unwrap();
    fs::write(dir.path().join("conf.d/ignored.txt"), "X 0\n").unwrap();
    fs::write(
        dir.path().join("main.conf"),
        "<<include conf.d/*.conf>>\nMain 0\n",
    )
    .unwrap();

    let options = TokenizerOptions::default().with_config_file("main.conf");
    let loader = FsSourceLoader::with_base_dir(dir.path());
    let mut tokenizer = Tokenizer::with_loader(options, Box::new(loader)).unwrap();

    assert_eq!(
        drain_expanding(&mut tokenizer).unwrap(),
        vec![
            include_req("conf.d/*.conf"),
            keyvalue("A", "1"),
            keyvalue("B", "2"),
            Token::IncludeEnd,
            keyvalue("Main", "0"),
        ]
    );
}

#[test]
fn test_filesystem_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = TokenizerOptions::default().with_config_file("absent.conf");
    let result = Tokenizer::with_loader(options, Box::new(FsSourceLoader::with_base_dir(dir.path())));
    assert!(matches!(
        result,
        Err(TokenizerError::Source(SourceError::NotFound(_)))
    ));
}

#[test]
fn test_malformed_include_fails_expansion() {
    let loader = MemorySourceLoader::new().with_source("bad.conf", "<<unknown thing>>");
    let options = TokenizerOptions::default().with_string("<<include bad.conf>>\nAfter 1");
    let mut tokenizer = Tokenizer::with_loader(options, Box::new(loader)).unwrap();

    assert_eq!(tokenizer.next_token(), include_req("bad.conf"));
    assert!(matches!(
        tokenizer.expand_include("bad.conf"),
        Err(TokenizerError::UnknownDirective { .. })
    ));
    // The stream is untouched by the failed expansion.
    assert_eq!(tokenizer.next_token(), keyvalue("After", "1"));
}
