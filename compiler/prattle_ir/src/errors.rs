//! Evaluation errors.
//!
//! [`EvalErrorKind`] categorizes what went wrong; factory functions such as
//! [`undefined_symbol`] are the way errors are created. A value raised by the
//! `throw` builtin travels as [`EvalErrorKind::Thrown`] so that `try` can hand
//! it back unchanged.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    UndefinedSymbol {
        name: String,
    },
    MissingCondition,
    MissingThenBranch,
    UndefinedMethod {
        method: String,
        type_name: String,
    },
    NotCallable {
        type_name: String,
    },
    TypeMismatch {
        operation: String,
        expected: String,
        got: String,
    },
    InvalidParameter {
        reason: String,
    },
    InvalidAssignmentTarget {
        type_name: String,
    },
    MalformedForm {
        form: String,
        reason: String,
    },
    ArgumentCount {
        function: String,
        expected: String,
        got: usize,
    },
    DivisionByZero,
    RecursionLimit {
        limit: usize,
    },
    /// A value raised by `throw`.
    Thrown(Value),
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedSymbol { name } => write!(f, "undefined symbol \"{name}\""),
            Self::MissingCondition => write!(f, "no condition for if"),
            Self::MissingThenBranch => write!(f, "no true branch for if"),
            Self::UndefinedMethod { method, type_name } => {
                write!(f, "undefined method \"{method}\" on {type_name}")
            }
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::TypeMismatch {
                operation,
                expected,
                got,
            } => write!(f, "{operation} expects {expected}, got {got}"),
            Self::InvalidParameter { reason } => write!(f, "invalid parameter: {reason}"),
            Self::InvalidAssignmentTarget { type_name } => {
                write!(f, "cannot assign to a {type_name}")
            }
            Self::MalformedForm { form, reason } => write!(f, "malformed {form}: {reason}"),
            Self::ArgumentCount {
                function,
                expected,
                got,
            } => write!(f, "{function} expects {expected} arguments, got {got}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::RecursionLimit { limit } => {
                write!(f, "maximum recursion depth exceeded (limit: {limit})")
            }
            Self::Thrown(value) => write!(f, "uncaught exception: {value}"),
            Self::Custom { message } => f.write_str(message),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Always `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// An uncategorized error.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        EvalError {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    /// The value a `catch` handler receives: the thrown value itself, or a
    /// `{message: ...}` record describing any other error.
    pub fn payload(&self) -> Value {
        match &self.kind {
            EvalErrorKind::Thrown(value) => value.clone(),
            _ => Value::record([("message", Value::string(self.message.clone()))]),
        }
    }

    #[inline]
    pub fn is_thrown(&self) -> bool {
        matches!(self.kind, EvalErrorKind::Thrown(_))
    }
}

#[cold]
pub fn undefined_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedSymbol {
        name: name.to_string(),
    })
}

#[cold]
pub fn missing_condition() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingCondition)
}

#[cold]
pub fn missing_then_branch() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingThenBranch)
}

#[cold]
pub fn undefined_method(method: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedMethod {
        method: method.to_string(),
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

/// `operation` got an operand of the wrong type.
#[cold]
pub fn type_mismatch(operation: &str, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        operation: operation.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn invalid_parameter(reason: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidParameter {
        reason: reason.into(),
    })
}

#[cold]
pub fn invalid_assignment_target(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAssignmentTarget {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn malformed_form(form: &str, reason: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedForm {
        form: form.to_string(),
        reason: reason.into(),
    })
}

#[cold]
pub fn wrong_arg_count(function: &str, expected: impl Into<String>, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentCount {
        function: function.to_string(),
        expected: expected.into(),
        got,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

/// Raise `value` as an exception.
#[cold]
pub fn thrown(value: Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Thrown(value))
}
