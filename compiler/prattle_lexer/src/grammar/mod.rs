//! Lexical rules and the rule table.

use std::sync::LazyLock;

use prattle_ir::{Span, Token, TokenKind, TokenList};
use regex::Regex;
use tracing::{trace, warn};

use crate::escape::string_literal_value;
use crate::{LexError, LexOutput};

/// One lexical rule: a pattern with exactly one capturing group, the kind
/// of token it produces and that token's binding power.
///
/// The capture pattern is anchored to the start of the input and may be
/// surrounded by whitespace, which the match absorbs.
#[derive(Clone, Debug)]
pub struct Rule {
    kind: TokenKind,
    pattern: Regex,
    power: u8,
}

/// A successful [`Rule::accept`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleMatch {
    /// Bytes consumed, including surrounding whitespace.
    pub consumed: usize,
    /// Byte offset of the capture within the input.
    pub offset: usize,
    pub value: Option<String>,
}

impl Rule {
    /// Build a rule from the body of its capturing group.
    pub fn new(kind: TokenKind, capture: &str, power: u8) -> Result<Rule, regex::Error> {
        let pattern = Regex::new(&format!(r"^\s*({capture})\s*"))?;
        Ok(Rule {
            kind,
            pattern,
            power,
        })
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn power(&self) -> u8 {
        self.power
    }

    /// Match this rule at the very start of `input`.
    pub fn accept(&self, input: &str) -> Option<RuleMatch> {
        let captures = self.pattern.captures(input)?;
        let whole = captures.get(0)?;
        if whole.end() == 0 {
            return None;
        }
        let group = captures.get(1);
        Some(RuleMatch {
            consumed: whole.end(),
            offset: group.map_or(0, |m| m.start()),
            value: group.map(|m| m.as_str().to_owned()),
        })
    }
}

/// Capture bodies of the standard table, in priority order.
const STANDARD_RULES: [(TokenKind, &str, u8); 20] = [
    (TokenKind::Number, r"[0-9]*\.?[0-9]+", 0),
    (TokenKind::Symbol, r"[a-zA-Z0-9_]+", 0),
    (
        TokenKind::String,
        r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#,
        0,
    ),
    (TokenKind::CloseParen, r"\)", 0),
    (TokenKind::Semicolon, ";", 10),
    (TokenKind::Arrow, "=>", 70),
    (TokenKind::Apply, "->", 70),
    (TokenKind::EqEq, "==", 30),
    (TokenKind::NotEq, "!=", 30),
    (TokenKind::LtEq, "<=", 30),
    (TokenKind::Lt, "<", 30),
    (TokenKind::GtEq, ">=", 30),
    (TokenKind::Gt, ">", 30),
    (TokenKind::Assign, "=", 20),
    (TokenKind::Plus, r"\+", 50),
    (TokenKind::Minus, "-", 50),
    (TokenKind::Star, r"\*", 60),
    (TokenKind::Slash, "/", 60),
    (TokenKind::OpenParen, r"\(", 80),
    (TokenKind::Comma, ",", 5),
];

#[allow(
    clippy::expect_used,
    reason = "the standard patterns are literals exercised by every lexer test"
)]
static STANDARD: LazyLock<Grammar> = LazyLock::new(|| {
    let rules = STANDARD_RULES
        .iter()
        .map(|&(kind, capture, power)| Rule::new(kind, capture, power))
        .collect::<Result<Vec<_>, _>>()
        .expect("standard lexical rules must compile");
    Grammar::new(rules)
});

/// An ordered rule table. The first rule that matches wins.
#[derive(Clone, Debug)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    pub fn new(rules: Vec<Rule>) -> Self {
        Grammar { rules }
    }

    /// The language's rule table.
    pub fn standard() -> &'static Grammar {
        &STANDARD
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Binding power of tokens of `kind`, or 0 if no rule produces them.
    pub fn power_of(&self, kind: TokenKind) -> u8 {
        self.rules
            .iter()
            .find(|r| r.kind == kind)
            .map_or(0, Rule::power)
    }

    /// Cut `source` into tokens, line by line.
    pub fn tokenize(&self, source: &str) -> LexOutput {
        let mut tokens = TokenList::new();
        let mut errors = Vec::new();
        let mut end = Span::new(1, 1);

        for (line_index, line) in source.lines().enumerate() {
            self.tokenize_line(line, line_index, &mut tokens, &mut errors);
            end = Span::from_indices(line_index, line.chars().count());
        }

        tokens.push(Token::end(end));
        LexOutput { tokens, errors }
    }

    fn tokenize_line(
        &self,
        line: &str,
        line_index: usize,
        tokens: &mut TokenList,
        errors: &mut Vec<LexError>,
    ) {
        let mut offset = 0;
        while offset < line.len() {
            let rest = &line[offset..];
            if rest.trim().is_empty() {
                return;
            }

            let Some((rule, found)) = self
                .rules
                .iter()
                .find_map(|rule| rule.accept(rest).map(|found| (rule, found)))
            else {
                let skipped = rest.len() - rest.trim_start().len();
                let span = Span::from_indices(line_index, char_column(line, offset + skipped));
                warn!(%span, text = rest.trim(), "unable to tokenize");
                errors.push(LexError::unrecognized(span, rest.trim()));
                return;
            };

            let span = Span::from_indices(line_index, char_column(line, offset + found.offset));
            let value = match rule.kind {
                TokenKind::String => found.value.as_deref().map(string_literal_value),
                _ => found.value,
            };
            let token = Token::new(rule.kind, value, rule.power, span);
            trace!(%token, "lexed");
            tokens.push(token);
            offset += found.consumed;
        }
    }
}

/// 0-based character column of byte offset `byte` in `line`.
fn char_column(line: &str, byte: usize) -> usize {
    line.get(..byte).map_or(byte, |prefix| prefix.chars().count())
}
