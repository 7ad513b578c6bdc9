//! Lexer for Prattle.
//!
//! Source text is cut into tokens by an ordered table of regex [`Rule`]s.
//! Each line is scanned from left to right; at every position the rules are
//! tried in table order and the first one that matches wins. A token records
//! the rule's kind, the text of the rule's capturing group, the rule's
//! binding power and the line/column where the capture starts.
//!
//! Input that no rule matches does not abort lexing: a [`LexError`] is
//! recorded, the remainder of that line is skipped and lexing continues on
//! the next line.

mod escape;
mod grammar;
mod lex_error;

use prattle_ir::{Token, TokenList};

pub use grammar::{Grammar, Rule, RuleMatch};
pub use lex_error::LexError;

/// Tokens plus any recoverable errors met along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Tokens without the trailing end marker.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(|t| t.kind != prattle_ir::TokenKind::End)
    }
}

/// Lex `source` with the standard grammar.
pub fn lex(source: &str) -> LexOutput {
    Grammar::standard().tokenize(source)
}
