//! Prattle Eval - tree-walking evaluator for Prattle ASTs.
//!
//! # Architecture
//!
//! - [`Interpreter`]: owns the root environment, the print handler and the
//!   recursion limit; its core loop is a trampoline so that tail calls run
//!   in constant stack
//! - special forms (`set`, `fn`, `let`, `do`, `if`, `try`, ...) are matched
//!   on the head symbol of a list node
//! - builtins are plain functions installed in the root environment and
//!   reach back into the interpreter through [`prattle_ir::Host`]
//! - [`PrintHandlerImpl`]: where `print` output goes

mod builtins;
pub mod diagnostics;
pub mod interpreter;
mod print_handler;

pub use builtins::builtin_names;
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_DEPTH};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use prattle_ir::{Environment, EvalError, EvalErrorKind, EvalResult, Value};

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
