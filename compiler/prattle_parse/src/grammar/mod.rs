//! Expression grammar: the binding-power loop and argument collection.
//!
//! - `prefix`: behaviour of a token that starts an expression
//! - `infix`: behaviour of a token that follows a left operand

mod infix;
mod prefix;

use prattle_ir::{Token, TokenKind, Value};
use prattle_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// Binding power of a unary `+` or `-` operand.
const UNARY_POWER: u8 = 70;

impl<'a> Parser<'a> {
    /// Parse one expression whose operators bind more tightly than `rbp`.
    ///
    /// Returns `None` without consuming anything when the next token is `)`
    /// or the end of input.
    pub fn expression(&mut self, rbp: u8) -> Result<Option<Value>, ParseError> {
        ensure_sufficient_stack(|| self.expression_inner(rbp))
    }

    fn expression_inner(&mut self, rbp: u8) -> Result<Option<Value>, ParseError> {
        if matches!(
            self.cursor.current_kind(),
            TokenKind::CloseParen | TokenKind::End
        ) {
            return Ok(None);
        }

        let token = self.cursor.advance();
        let mut left = self.prefix(token)?;
        while rbp < self.cursor.current().power {
            let token = self.cursor.advance();
            left = self.infix(token, left)?;
        }
        Ok(Some(left))
    }

    /// An expression that must be present, as the operand of `operator`.
    fn operand(&mut self, rbp: u8, operator: &Token) -> Result<Value, ParseError> {
        match self.expression(rbp)? {
            Some(value) => Ok(value),
            None => Err(ParseError::missing_operand(
                operator,
                self.cursor.current(),
            )),
        }
    }

    /// Collect one comma-separated argument list.
    ///
    /// The enclosing list's queue is set aside while this one is parsed so
    /// nested calls never see each other's arguments.
    pub(crate) fn arguments(&mut self) -> Result<Vec<Value>, ParseError> {
        let enclosing = std::mem::take(&mut self.pending);
        let first = self.expression(0);
        let queued = std::mem::replace(&mut self.pending, enclosing);

        let mut args = Vec::with_capacity(queued.len() + 1);
        args.extend(first?);
        args.extend(queued);
        Ok(args)
    }

    /// Consume the `)` matching `open`.
    fn close_paren(&mut self, open: &Token) -> Result<(), ParseError> {
        if self.cursor.check(TokenKind::CloseParen) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(ParseError::unclosed_paren(open, self.cursor.current()))
        }
    }
}

/// A lone item stands for itself; zero or several become an argument list.
pub(crate) fn collapse(mut items: Vec<Value>) -> Value {
    if items.len() == 1 {
        items.swap_remove(0)
    } else {
        Value::arg_list(items)
    }
}

/// `(do e1 e2 ...)`.
pub(crate) fn do_form(exprs: Vec<Value>) -> Value {
    let mut items = Vec::with_capacity(exprs.len() + 1);
    items.push(Value::symbol("do"));
    items.extend(exprs);
    Value::list(items)
}

/// Items of an argument-list node, or the value itself as the only item.
fn spread(value: Value) -> Vec<Value> {
    match value.arg_list_items() {
        Some(items) => items.to_vec(),
        None => vec![value],
    }
}
