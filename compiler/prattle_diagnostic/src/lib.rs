//! Diagnostics for every stage of the pipeline.
//!
//! Lexer, parser and evaluator errors each convert into a [`Diagnostic`]
//! carrying an [`ErrorCode`], a message and, when the error has a source
//! position, a labelled [`prattle_ir::Span`]. The [`emitter`] module renders
//! diagnostics for a terminal.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
