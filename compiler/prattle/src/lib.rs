//! Prattle - a small expression language.
//!
//! Source text goes through three stages:
//!
//! ```text
//! text ──► lex() ──► TokenList ──► parse() ──► AST (Value) ──► evaluate() ──► Value
//! ```
//!
//! The AST is plain data: `1 + 2 * 3` parses to the list `(+ 1 (* 2 3))`,
//! which [`to_string`] renders back in that form.
//!
//! [`evaluate`] runs on a per-thread default interpreter whose root
//! environment persists between calls. Embedders that need their own print
//! handler or depth limit build an [`Interpreter`] directly.

pub mod commands;
mod config;
mod tracing_setup;

use prattle_diagnostic::Diagnostic;
use tracing::debug_span;

pub use config::Config;
pub use prattle_diagnostic::emitter::ColorMode;
pub use prattle_eval::{
    buffer_handler, silent_handler, stdout_handler, Interpreter, InterpreterBuilder,
    SharedPrintHandler,
};
pub use prattle_ir::{to_string, Environment, EvalError, Span, Token, TokenKind, TokenList, Value};
pub use prattle_lexer::{LexError, LexOutput};
pub use prattle_parse::ParseError;
pub use tracing_setup::init_tracing;

/// Anything that can stop a parse or an evaluation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Parse(error) => error.to_diagnostic(),
            Error::Eval(error) => prattle_eval::diagnostics::to_diagnostic(error),
        }
    }
}

/// What [`evaluate`] runs: source text, or an already parsed AST.
#[derive(Clone, Copy, Debug)]
pub enum Input<'a> {
    Source(&'a str),
    Ast(&'a Value),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(source: &'a str) -> Self {
        Input::Source(source)
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(ast: &'a Value) -> Self {
        Input::Ast(ast)
    }
}

thread_local! {
    static DEFAULT_INTERPRETER: Interpreter = Interpreter::new();
}

/// Tokens of `text`, ending with an end-of-input token. Unrecognized input
/// is skipped and logged.
pub fn lex(text: &str) -> TokenList {
    tokenize(text).tokens
}

/// Tokens of `text` together with the errors met along the way.
pub fn tokenize(text: &str) -> LexOutput {
    let _span = debug_span!("lex", bytes = text.len()).entered();
    prattle_lexer::lex(text)
}

/// Parse `text` into an AST.
pub fn parse(text: &str) -> Result<Value, Error> {
    let lexed = tokenize(text);
    let _span = debug_span!("parse", tokens = lexed.tokens.len()).entered();
    Ok(prattle_parse::parse(&lexed.tokens)?)
}

/// Evaluate source text or an AST on this thread's default interpreter, in
/// `env` or in its root environment.
pub fn evaluate<'a>(input: impl Into<Input<'a>>, env: Option<&Environment>) -> Result<Value, Error> {
    let ast = match input.into() {
        Input::Source(text) => parse(text)?,
        Input::Ast(ast) => ast.clone(),
    };
    let _span = debug_span!("evaluate").entered();
    Ok(with_default_interpreter(|interpreter| interpreter.evaluate(&ast, env))?)
}

/// Run `f` with this thread's default interpreter.
pub fn with_default_interpreter<R>(f: impl FnOnce(&Interpreter) -> R) -> R {
    DEFAULT_INTERPRETER.with(f)
}
