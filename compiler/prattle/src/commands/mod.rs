//! Command handlers for the `prattle` CLI.
//!
//! Each submodule implements one command. Reading input and reporting
//! diagnostics are shared and live here.

use std::io::{IsTerminal, Read};

use prattle_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use prattle_diagnostic::Diagnostic;

use crate::{Config, Interpreter, LexError, LexOutput};

mod debug;
mod explain;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use repl::run_repl;
pub use run::{eval_source, run_file};

/// Read a source file, or stdin for `-`. Exits with a message on failure.
pub(crate) fn read_source(path: &str) -> String {
    let result = if path == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content).map(|_| content)
    } else {
        std::fs::read_to_string(path)
    };

    match result {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Interpreter configured from the environment, printing to stdout.
pub(crate) fn configured_interpreter(config: &Config) -> Interpreter {
    Interpreter::builder().max_depth(config.max_depth).build()
}

/// Write diagnostics to stderr, quoting `source`, followed by a summary.
pub(crate) fn report(diagnostics: &[Diagnostic], source: &str, config: &Config) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(config.color, is_tty).with_source(source);
    emitter.emit_all(diagnostics);

    emitter.emit_summary(diagnostics.len());
    emitter.flush();
}

/// Report lexer errors. Returns `true` if there were any.
pub(crate) fn report_lex_errors(lexed: &LexOutput, source: &str, config: &Config) -> bool {
    if !lexed.has_errors() {
        return false;
    }
    let diagnostics: Vec<Diagnostic> = lexed.errors.iter().map(LexError::to_diagnostic).collect();
    report(&diagnostics, source, config);
    true
}
