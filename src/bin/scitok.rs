//! Command-line interface for scitok
//! Tokenizes a file (or stdin) and prints the tokens.
//!
//! Usage:
//!   scitok [PATH] [--config `<file>`] [--format simple|offsets|json] [--keep-hyphens]

use clap::{Arg, ArgAction, Command};
use scitok::config::Loader;
use scitok::{remove_line_wrap_hyphens, Tokens};
use std::io::Read;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("scitok")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize scientific text")
        .arg(
            Arg::new("path")
                .help("Path to the text file (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["simple", "offsets", "json"])
                .default_value("simple"),
        )
        .arg(
            Arg::new("keep-hyphens")
                .long("keep-hyphens")
                .help("Do not rejoin words hyphenated across line breaks")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("keep-hyphens") {
        loader = loader
            .set_override("preprocess.remove_line_wrap_hyphens", false)
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let tokenizer = config.build_tokenizer().unwrap_or_else(|e| {
        eprintln!("Error building tokenizer: {}", e);
        std::process::exit(1);
    });

    let source = read_source(matches.get_one::<String>("path")).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });
    let text = if config.preprocess.remove_line_wrap_hyphens {
        remove_line_wrap_hyphens(&source)
    } else {
        source
    };

    let tokens = tokenizer.tokenize(&text);
    // value_parser restricts the choices
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("simple");
    let output = render(&tokens, format).unwrap_or_else(|e| {
        eprintln!("Error serializing tokens: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
}

fn read_source(path: Option<&String>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn render(tokens: &Tokens, format: &str) -> serde_json::Result<String> {
    let output = match format {
        "json" => serde_json::to_string_pretty(tokens)? + "\n",
        "offsets" => tokens
            .iter()
            .map(|t| format!("{}\t{}\t{}\n", t.start(), t.end(), t.text))
            .collect(),
        _ => tokens.iter().map(|t| format!("{}\n", t.text)).collect(),
    };
    Ok(output)
}
