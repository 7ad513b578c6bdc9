use prattle_ir::{Span, Token, TokenKind, TokenList};

use super::Cursor;

fn list(kinds: &[TokenKind]) -> TokenList {
    let mut tokens = TokenList::new();
    for (i, &kind) in kinds.iter().enumerate() {
        let column = u32::try_from(i + 1).unwrap_or(u32::MAX);
        tokens.push(Token::new(kind, None, 0, Span::new(1, column)));
    }
    tokens
}

#[test]
fn test_advance_walks_tokens() {
    let tokens = list(&[TokenKind::Symbol, TokenKind::Plus, TokenKind::End]);
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.advance().kind, TokenKind::Symbol);
    assert!(cursor.check(TokenKind::Plus));
    assert_eq!(cursor.advance().kind, TokenKind::Plus);
    assert!(cursor.is_at_end());
}

#[test]
fn test_cursor_stops_at_end_marker() {
    let tokens = list(&[TokenKind::End]);
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.position(), 0);
    assert!(cursor.is_at_end());
}

#[test]
fn test_missing_end_marker_reads_as_end() {
    let tokens = list(&[TokenKind::Number]);
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current_span(), Span::DUMMY);
}
