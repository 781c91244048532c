use apconf::{
    FsSourceLoader, SplitPolicy, Token, Tokenizer, TokenizerError, TokenizerOptions,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to tokenize
    file: PathBuf,

    /// How key-value lines are split: guess, whitespace, equalsign or custom
    #[arg(long, default_value_t = SplitPolicy::Guess)]
    split_policy: SplitPolicy,

    /// Regular expression used by the custom split policy
    #[arg(long)]
    split_delimiter: Option<String>,

    /// Keep `/* ... */` lines instead of dropping them
    #[arg(long)]
    no_c_comments: bool,

    /// Treat a trailing `/` inside a tag as part of the attribute
    #[arg(long)]
    slash_is_directory: bool,

    /// Recognize `Include`/`IncludeOptional` key-values as include requests
    #[arg(long)]
    apache_include: bool,

    /// Expand include requests relative to the file's directory
    #[arg(long)]
    expand_includes: bool,

    /// Print tokens as JSON, one per line
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn options(&self) -> TokenizerOptions {
        let mut options = TokenizerOptions::default()
            .with_split_policy(self.split_policy)
            .with_c_comments(!self.no_c_comments)
            .with_slash_is_directory(self.slash_is_directory)
            .with_apache_include(self.apache_include);
        if let Some(delimiter) = &self.split_delimiter {
            options = options.with_split_delimiter(delimiter.as_str());
        }
        options
    }
}

fn print_token(token: &Token, json: bool) -> Result<(), TokenizerError> {
    if json {
        let line = serde_json::to_string(token)
            .map_err(|e| TokenizerError::config(format!("Failed to serialize token: {}", e)))?;
        println!("{}", line);
    } else {
        println!("{:?}", token);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), TokenizerError> {
    // Includes are relative to the file, so the loader is rooted there.
    let (loader, file) = match (cli.file.parent(), cli.file.file_name()) {
        (Some(dir), Some(name)) if !dir.as_os_str().is_empty() => {
            (FsSourceLoader::with_base_dir(dir), PathBuf::from(name))
        }
        _ => (FsSourceLoader::new(), cli.file.clone()),
    };
    let options = cli.options().with_config_file(file.to_string_lossy());
    let mut tokenizer = Tokenizer::with_loader(options, Box::new(loader))?;
    debug!("options: {:?}", tokenizer.options());

    loop {
        let token = tokenizer.next_token();
        if token.is_end() {
            break;
        }
        print_token(&token, cli.json)?;
        if let Token::IncludeReq { pattern } = &token {
            if cli.expand_includes {
                tokenizer.expand_include(pattern)?;
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
