//! Tokens produced by the lexer.
//!
//! A token records which grammar rule produced it ([`TokenKind`]), the text
//! captured by that rule, the rule's binding power and where the capture
//! started. Parse-time behaviour is not stored on the token; the parser
//! dispatches on `kind`.

use std::fmt;
use std::ops::Index;

use crate::Span;

/// Identifies the grammar rule that produced a token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Number,
    Symbol,
    String,
    CloseParen,
    Semicolon,
    /// `=>`
    Arrow,
    /// `->`
    Apply,
    EqEq,
    NotEq,
    LtEq,
    Lt,
    GtEq,
    Gt,
    /// `=`
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    Comma,
    /// End of input.
    End,
}

impl TokenKind {
    /// The operator symbol used as the head of the AST node this token
    /// builds, for tokens that build one.
    pub fn operator(self) -> Option<&'static str> {
        match self {
            TokenKind::EqEq => Some("=="),
            TokenKind::NotEq => Some("!="),
            TokenKind::LtEq => Some("<="),
            TokenKind::Lt => Some("<"),
            TokenKind::GtEq => Some(">="),
            TokenKind::Gt => Some(">"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            _ => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
            TokenKind::String => "string",
            TokenKind::CloseParen => "`)`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Arrow => "`=>`",
            TokenKind::Apply => "`->`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Lt => "`<`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Gt => "`>`",
            TokenKind::Assign => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::OpenParen => "`(`",
            TokenKind::Comma => "`,`",
            TokenKind::End => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single lexed token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Text of the rule's capturing group, if it captured anything.
    pub value: Option<String>,
    /// Binding power inherited from the producing rule.
    pub power: u8,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: Option<String>, power: u8, span: Span) -> Self {
        Token {
            kind,
            value,
            power,
            span,
        }
    }

    /// The end-of-input marker.
    pub fn end(span: Span) -> Self {
        Token::new(TokenKind::End, None, 0, span)
    }

    /// Captured text, or the empty string.
    #[inline]
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{:?}({value:?}) @{}", self.kind, self.span),
            None => write!(f, "{:?} @{}", self.kind, self.span),
        }
    }
}

/// Ordered tokens for one source text, always terminated by an
/// [`TokenKind::End`] token once the lexer has finished.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds of every token, in order. Handy for tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
