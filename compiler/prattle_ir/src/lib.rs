//! Prattle IR - the data model shared by every stage of the pipeline.
//!
//! The lexer produces [`Token`]s, the parser produces a [`Value`] tree (the
//! AST *is* ordinary data: nested lists of symbols and literals), and the
//! evaluator reduces that tree to another [`Value`] inside an
//! [`Environment`].
//!
//! - [`span`]: line/column source positions
//! - [`token`]: token kinds and the token list
//! - [`value`]: runtime values, closures, records and builtins
//! - [`environment`]: copy-on-entry lexical scopes
//! - [`errors`]: evaluation errors and their factory functions
//! - [`render`]: S-expression rendering

pub mod environment;
pub mod errors;
pub mod render;
pub mod span;
pub mod token;
pub mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use render::to_string;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
pub use value::{
    Builtin, BuiltinFn, CallContext, Closure, Heap, Host, LocalScope, Name, Params, Record, Value,
    ARGS_MARKER,
};
