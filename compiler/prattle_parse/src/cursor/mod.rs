//! Token cursor.

use prattle_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

/// Returned once the tokens run out, so a list without an end marker still
/// parses.
static END: Token = Token {
    kind: TokenKind::End,
    value: None,
    power: 0,
    span: Span::DUMMY,
};

/// Position in a token list. Never moves past the end marker.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&END)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::End)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(pos = self.pos, kind = %token.kind, span = %token.span, "advance");
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests;
