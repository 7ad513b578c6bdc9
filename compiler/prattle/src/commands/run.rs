//! The `run` and `eval` commands.

use tracing::debug;

use crate::{tokenize, Config, Error, Value};

use super::{configured_interpreter, read_source, report, report_lex_errors};

/// Run a program file. Program output comes from `print`; the final value is
/// not shown.
pub fn run_file(path: &str) {
    let source = read_source(path);
    if let Err(code) = execute(&source) {
        std::process::exit(code);
    }
}

/// Evaluate a snippet given on the command line and print its value.
pub fn eval_source(source: &str) {
    match execute(source) {
        Ok(value) => println!("{}", show(&value)),
        Err(code) => std::process::exit(code),
    }
}

fn execute(source: &str) -> Result<Value, i32> {
    let config = Config::from_env();
    let lexed = tokenize(source);
    if report_lex_errors(&lexed, source, &config) {
        return Err(1);
    }

    let result = prattle_parse::parse(&lexed.tokens)
        .map_err(Error::from)
        .and_then(|ast| {
            debug!(ast = %show(&ast), "parsed");
            let interpreter = configured_interpreter(&config);
            interpreter.evaluate(&ast, None).map_err(Error::from)
        });

    result.map_err(|error| {
        report(&[error.to_diagnostic()], source, &config);
        1
    })
}

/// The S-expression form of a value; atoms render on their own.
pub(crate) fn show(value: &Value) -> String {
    prattle_ir::render::render(value)
}
