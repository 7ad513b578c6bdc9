use prattle_ir::{Token, TokenKind, Value};
use tracing::trace;

use super::{do_form, spread};
use crate::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Behaviour of `token` following the operand `left`.
    pub(crate) fn infix(&mut self, token: &'a Token, left: Value) -> Result<Value, ParseError> {
        trace!(kind = %token.kind, span = %token.span, "infix");

        if let Some(op) = token.kind.operator() {
            let right = self.operand(token.power, token)?;
            return Ok(Value::list(vec![Value::symbol(op), left, right]));
        }

        match token.kind {
            TokenKind::Assign => {
                let right = self.operand(token.power, token)?;
                Ok(Value::list(vec![Value::symbol("set"), left, right]))
            }
            TokenKind::Semicolon => {
                let Some(right) = self.expression(token.power)? else {
                    return Ok(left);
                };
                if left.head_symbol() == Some("do") {
                    let mut items = left.as_list().map(<[Value]>::to_vec).unwrap_or_default();
                    items.push(right);
                    Ok(Value::list(items))
                } else {
                    Ok(do_form(vec![left, right]))
                }
            }
            TokenKind::Arrow => {
                let params = spread(left);
                let body = self.operand(0, token)?;
                Ok(Value::list(vec![
                    Value::symbol("fn"),
                    Value::list(params),
                    body,
                ]))
            }
            TokenKind::Apply => {
                let callee = self.operand(token.power, token)?;
                let mut call = vec![callee];
                call.extend(spread(left));
                Ok(Value::list(call))
            }
            TokenKind::OpenParen => {
                let args = self.arguments()?;
                self.close_paren(token)?;
                let mut call = Vec::with_capacity(args.len() + 1);
                call.push(left);
                call.extend(args);
                Ok(Value::list(call))
            }
            TokenKind::Comma => {
                let right = self.operand(token.power, token)?;
                self.pending.push(right);
                Ok(left)
            }
            _ => Err(ParseError::unexpected_infix(token)),
        }
    }
}
