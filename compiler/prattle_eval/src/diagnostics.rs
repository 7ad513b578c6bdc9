//! Turning evaluation errors into diagnostics.

use prattle_diagnostic::{Diagnostic, ErrorCode};
use prattle_ir::{EvalError, EvalErrorKind};

/// The error code reported for each kind of evaluation error.
pub fn error_code(error: &EvalError) -> ErrorCode {
    match &error.kind {
        EvalErrorKind::UndefinedSymbol { .. } => ErrorCode::E2001,
        EvalErrorKind::MissingCondition
        | EvalErrorKind::MissingThenBranch
        | EvalErrorKind::InvalidParameter { .. }
        | EvalErrorKind::InvalidAssignmentTarget { .. }
        | EvalErrorKind::MalformedForm { .. } => ErrorCode::E2002,
        EvalErrorKind::NotCallable { .. } => ErrorCode::E2003,
        EvalErrorKind::UndefinedMethod { .. } => ErrorCode::E2004,
        EvalErrorKind::TypeMismatch { .. }
        | EvalErrorKind::ArgumentCount { .. }
        | EvalErrorKind::DivisionByZero => ErrorCode::E2005,
        EvalErrorKind::RecursionLimit { .. } => ErrorCode::E2006,
        EvalErrorKind::Thrown(_) => ErrorCode::E2007,
        EvalErrorKind::Custom { .. } => ErrorCode::E2999,
    }
}

/// Evaluation errors carry no source position, so the diagnostic has no
/// label.
pub fn to_diagnostic(error: &EvalError) -> Diagnostic {
    let diagnostic = Diagnostic::error(error_code(error)).with_message(error.message.clone());
    match &error.kind {
        EvalErrorKind::Thrown(_) => {
            diagnostic.with_note("wrap the call in `try(..., catch(e, ...))` to handle it")
        }
        EvalErrorKind::RecursionLimit { .. } => {
            diagnostic.with_note("set PRATTLE_MAX_DEPTH to raise the limit")
        }
        _ => diagnostic,
    }
}
