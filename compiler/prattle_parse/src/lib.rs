//! Pratt parser for Prattle.
//!
//! Tokens are turned into an AST made of ordinary [`Value`]s: a compound
//! expression is a list whose head says what it is (`(+ 1 2)`,
//! `(set a 1)`, `(fn (x) x)`, `(f a b)`), and leaves are numbers, strings
//! and symbols.
//!
//! Every token carries a binding power from the rule that produced it.
//! [`Parser::expression`] reads one token in prefix position and then keeps
//! folding infix tokens into the left operand for as long as they bind more
//! tightly than the caller's right binding power. All prefix and infix
//! behaviour lives in the `grammar` module and is selected by token kind.
//!
//! Commas do not build nodes. Each comma parses its right operand and pushes
//! it onto a queue of pending arguments; the innermost enclosing argument
//! list (a call, a parenthesised group or the top level) drains that queue.

mod cursor;
mod grammar;

use prattle_diagnostic::{Diagnostic, ErrorCode};
use prattle_ir::{Span, Token, TokenList, Value};

use cursor::Cursor;

/// Parse error with the position of the offending token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {}, column {}", .span.line, .span.column)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
        }
    }

    #[cold]
    pub(crate) fn unexpected_prefix(token: &Token) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("unexpected {} at the start of an expression", token.kind),
            token.span,
        )
    }

    #[cold]
    pub(crate) fn unexpected_infix(token: &Token) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("unexpected {} after an expression", token.kind),
            token.span,
        )
    }

    #[cold]
    pub(crate) fn missing_operand(operator: &Token, found: &Token) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("expected an operand after {}, found {}", operator.kind, found.kind),
            found.span,
        )
    }

    #[cold]
    pub(crate) fn unclosed_paren(open: &Token, found: &Token) -> Self {
        ParseError::new(
            ErrorCode::E1003,
            format!("unclosed `(`: expected `)`, found {}", found.kind),
            open.span,
        )
    }

    #[cold]
    pub(crate) fn unmatched_close(span: Span) -> Self {
        ParseError::new(ErrorCode::E1004, "unmatched `)`", span)
    }

    #[cold]
    pub(crate) fn invalid_number(token: &Token) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            format!("invalid number literal {:?}", token.text()),
            token.span,
        )
    }

    #[cold]
    pub(crate) fn missing_argument(comma: &Token) -> Self {
        ParseError::new(ErrorCode::E1006, "expected an expression before `,`", comma.span)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.code {
            ErrorCode::E1003 => "opened here",
            ErrorCode::E1004 => "no matching `(`",
            _ => "here",
        };
        Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label)
    }
}

/// Parser state: a cursor over the tokens and the pending-arguments queue
/// filled by commas.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    pending: Vec<Value>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            pending: Vec::new(),
        }
    }

    /// Parse every expression in the token list.
    ///
    /// No expressions give the empty list, one is returned as is, and
    /// several are wrapped in `(do ...)`.
    pub fn parse_program(&mut self) -> Result<Value, ParseError> {
        let mut exprs = Vec::new();
        loop {
            match self.cursor.current_kind() {
                prattle_ir::TokenKind::End => break,
                prattle_ir::TokenKind::CloseParen => {
                    return Err(ParseError::unmatched_close(self.cursor.current_span()))
                }
                _ => {}
            }
            let items = self.arguments()?;
            exprs.push(grammar::collapse(items));
        }

        Ok(match exprs.len() {
            0 => Value::list(Vec::new()),
            1 => exprs.swap_remove(0),
            _ => grammar::do_form(exprs),
        })
    }
}

/// Parse a token list into an AST.
pub fn parse(tokens: &TokenList) -> Result<Value, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
