//! The interactive `repl` command.

use std::io::{self, BufRead, Write};

use crate::{tokenize, Config, Error, Value};

use super::run::show;
use super::{configured_interpreter, report, report_lex_errors};

const PROMPT: &str = "> ";

/// Read lines from stdin and evaluate each one in a shared root
/// environment. Non-nil results are echoed. Ends on EOF or `:quit`.
pub fn run_repl() {
    let config = Config::from_env();
    let interpreter = configured_interpreter(&config);
    let stdin = io::stdin();

    loop {
        print!("{PROMPT}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading input: {e}");
                break;
            }
        }

        let line = line.trim();
        if line == ":quit" || line == ":q" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let lexed = tokenize(line);
        if report_lex_errors(&lexed, line, &config) {
            continue;
        }
        let result = prattle_parse::parse(&lexed.tokens)
            .map_err(Error::from)
            .and_then(|ast| interpreter.evaluate(&ast, None).map_err(Error::from));

        match result {
            Ok(Value::Nil) => {}
            Ok(value) => println!("{}", show(&value)),
            Err(error) => report(&[error.to_diagnostic()], line, &config),
        }
    }
}
