mod include_tests;
mod tokenizer_tests;

use apconf::{Token, Tokenizer, TokenizerOptions};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

pub fn tokenize(options: TokenizerOptions) -> Vec<Token> {
    Tokenizer::new(options)
        .expect("tokenizer should build")
        .collect()
}

pub fn tokenize_str(input: &str) -> Vec<Token> {
    tokenize(TokenizerOptions::default().with_string(input))
}

pub fn keyvalue(name: &str, value: &str) -> Token {
    Token::KeyValue {
        name: name.to_string(),
        value: Some(value.to_string()),
    }
}
