use std::fmt;

/// Error codes for all diagnostics.
///
/// The first digit names the stage:
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E2xxx: evaluator
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// No rule matches the input
    E0001,

    // Parser Errors (E1xxx)
    /// Token cannot start or continue an expression
    E1001,
    /// Expected an operand
    E1002,
    /// Unclosed `(`
    E1003,
    /// `)` without a matching `(`
    E1004,
    /// Invalid number literal
    E1005,
    /// `,` with nothing before it
    E1006,

    // Evaluator Errors (E2xxx)
    /// Undefined symbol
    E2001,
    /// Malformed special form
    E2002,
    /// Value is not callable
    E2003,
    /// Undefined method or property
    E2004,
    /// Operand of the wrong type
    E2005,
    /// Recursion limit exceeded
    E2006,
    /// Uncaught exception
    E2007,
    /// Other runtime error
    E2999,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2999 => "E2999",
        }
    }

    /// One-line explanation, shown by `prattle explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "no lexical rule matches the input",
            ErrorCode::E1001 => "this token cannot appear here",
            ErrorCode::E1002 => "an operator is missing its operand",
            ErrorCode::E1003 => "an opening parenthesis is never closed",
            ErrorCode::E1004 => "a closing parenthesis has no matching opening one",
            ErrorCode::E1005 => "a number literal could not be read",
            ErrorCode::E1006 => "a comma has no expression before it",
            ErrorCode::E2001 => "a symbol is used but never bound",
            ErrorCode::E2002 => "a special form is missing parts or has the wrong shape",
            ErrorCode::E2003 => "the head of a call is not a function",
            ErrorCode::E2004 => "a method or property does not exist on the target",
            ErrorCode::E2005 => "an operation received a value of the wrong type",
            ErrorCode::E2006 => "evaluation nested deeper than the configured limit",
            ErrorCode::E2007 => "a thrown value was not caught",
            ErrorCode::E2999 => "a runtime error occurred",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Parse a code such as `"E1003"`.
    pub fn from_code(code: &str) -> Option<ErrorCode> {
        ALL.iter().copied().find(|c| c.as_str() == code)
    }
}

const ALL: [ErrorCode; 15] = [
    ErrorCode::E0001,
    ErrorCode::E1001,
    ErrorCode::E1002,
    ErrorCode::E1003,
    ErrorCode::E1004,
    ErrorCode::E1005,
    ErrorCode::E1006,
    ErrorCode::E2001,
    ErrorCode::E2002,
    ErrorCode::E2003,
    ErrorCode::E2004,
    ErrorCode::E2005,
    ErrorCode::E2006,
    ErrorCode::E2007,
    ErrorCode::E2999,
];

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
