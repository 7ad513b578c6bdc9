//! Evaluator tests, grouped by feature.
//!
//! Most tests go through the real lexer and parser so that they read as
//! Prattle source. Forms the surface syntax cannot spell (`.`, `.-`, rest
//! parameters) are built as ASTs directly.

mod builtin_tests;

use prattle_ir::{EvalError, EvalResult, Value};

use crate::{buffer_handler, Interpreter};

pub(crate) fn interpreter() -> Interpreter {
    Interpreter::builder().print_handler(buffer_handler()).build()
}

pub(crate) fn parse(source: &str) -> Value {
    let lexed = prattle_lexer::lex(source);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    prattle_parse::parse(&lexed.tokens).unwrap()
}

pub(crate) fn eval_with(interpreter: &Interpreter, source: &str) -> EvalResult {
    interpreter.evaluate(&parse(source), None)
}

pub(crate) fn eval(source: &str) -> Value {
    eval_with(&interpreter(), source).unwrap()
}

pub(crate) fn eval_err(source: &str) -> EvalError {
    eval_with(&interpreter(), source).unwrap_err()
}

pub(crate) fn sym(name: &str) -> Value {
    Value::symbol(name)
}

pub(crate) fn num(n: f64) -> Value {
    Value::number(n)
}

pub(crate) fn form(items: Vec<Value>) -> Value {
    Value::list(items)
}
