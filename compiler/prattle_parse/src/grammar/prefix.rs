use prattle_ir::{Token, TokenKind, Value};
use tracing::trace;

use super::{collapse, UNARY_POWER};
use crate::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Behaviour of `token` at the start of an expression.
    pub(crate) fn prefix(&mut self, token: &'a Token) -> Result<Value, ParseError> {
        trace!(kind = %token.kind, span = %token.span, "prefix");
        match token.kind {
            TokenKind::Number => token
                .text()
                .parse::<f64>()
                .map(Value::Number)
                .map_err(|_| ParseError::invalid_number(token)),
            TokenKind::Symbol => Ok(Value::symbol(token.text())),
            TokenKind::String => Ok(Value::string(token.text())),
            TokenKind::OpenParen => {
                let items = self.arguments()?;
                self.close_paren(token)?;
                Ok(collapse(items))
            }
            TokenKind::Plus => self.operand(UNARY_POWER, token),
            TokenKind::Minus => Ok(match self.operand(UNARY_POWER, token)? {
                Value::Number(n) => Value::Number(-n),
                operand => Value::list(vec![Value::symbol("-"), operand]),
            }),
            TokenKind::Comma => Err(ParseError::missing_argument(token)),
            _ => Err(ParseError::unexpected_prefix(token)),
        }
    }
}
