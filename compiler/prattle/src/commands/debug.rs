//! Inspection commands: `lex` and `parse`.

use crate::{tokenize, Config};

use super::run::show;
use super::{read_source, report, report_lex_errors};

/// Print the token stream of a file.
pub fn lex_file(path: &str) {
    let source = read_source(path);
    let lexed = tokenize(&source);

    println!("Tokens for '{}' ({} tokens):", path, lexed.tokens.len());
    for token in &lexed.tokens {
        println!("  {token}");
    }

    if report_lex_errors(&lexed, &source, &Config::from_env()) {
        std::process::exit(1);
    }
}

/// Print the AST of a file (or stdin for `-`) as an S-expression.
pub fn parse_file(path: &str) {
    let source = read_source(path);
    let config = Config::from_env();
    let lexed = tokenize(&source);
    report_lex_errors(&lexed, &source, &config);

    match prattle_parse::parse(&lexed.tokens) {
        Ok(ast) => println!("{}", show(&ast)),
        Err(error) => {
            report(&[error.to_diagnostic()], &source, &config);
            std::process::exit(1);
        }
    }
}
