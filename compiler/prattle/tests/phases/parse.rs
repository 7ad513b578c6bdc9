use pretty_assertions::assert_eq;
use prattle::{Error, Span, TokenKind, Value};

use crate::common::render;

#[test]
fn operator_precedence() {
    assert_eq!(render("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(render("(1 + 2) * 3"), "(* (+ 1 2) 3)");
}

#[test]
fn assignment_and_sequence() {
    assert_eq!(render("a = 1"), "(set a 1)");
    assert_eq!(render("1 + 2; 3 + 4"), "(do (+ 1 2) (+ 3 4))");
}

#[test]
fn calls_and_nested_arguments() {
    assert_eq!(render("f(a,b,c)"), "(f a b c)");
    assert_eq!(render("1+f(n, m(1+2))"), "(+ 1 (f n (m (+ 1 2))))");
}

#[test]
fn lambdas() {
    assert_eq!(render("a=>a+b+c"), "(fn (a) (+ (+ a b) c))");
    assert_eq!(render("(a,b)=>a+b+c"), "(fn (a b) (+ (+ a b) c))");
    assert_eq!(
        render("f=((a,b)=>a+b);f(2,4)"),
        "(do (set f (fn (a b) (+ a b))) (f 2 4))"
    );
    assert_eq!(render("((a,b)=>a+b)(2,4)"), "((fn (a b) (+ a b)) 2 4)");
}

#[test]
fn apply_arrow() {
    assert_eq!(render("1->f"), "(f 1)");
    assert_eq!(render("(1, 2)->f"), "(f 1 2)");
}

#[test]
fn non_list_ast_has_no_rendering() {
    let ast = prattle::parse("42").unwrap();
    assert_eq!(ast, Value::number(42.0));
    assert_eq!(prattle::to_string(&ast), None);
}

#[test]
fn lex_ends_with_end_token() {
    let tokens = prattle::lex("a = 'hi'");
    assert_eq!(
        tokens.kinds(),
        vec![TokenKind::Symbol, TokenKind::Assign, TokenKind::String, TokenKind::End]
    );
    assert_eq!(tokens[2].value.as_deref(), Some("hi"));
    assert_eq!(tokens[2].span, Span::new(1, 5));
}

#[test]
fn unrecognized_input_skips_the_rest_of_the_line() {
    let lexed = prattle::tokenize("a # b\nc");
    assert_eq!(lexed.errors.len(), 1);
    assert_eq!(lexed.errors[0].span, Span::new(1, 3));
    assert_eq!(
        lexed.tokens.kinds(),
        vec![TokenKind::Symbol, TokenKind::Symbol, TokenKind::End]
    );
    assert_eq!(render("a # b\nc"), "(do a c)");
}

#[test]
fn parse_errors_carry_position() {
    let err = prattle::parse("1 +\n+").unwrap_err();
    let Error::Parse(parse_error) = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(parse_error.span.line, 2);
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn parse_error_becomes_a_diagnostic() {
    let err = prattle::parse("f(1, 2").unwrap_err();
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.code.as_str(), "E1003");
    assert_eq!(diagnostic.primary_span(), Some(Span::new(1, 2)));
}

/// Parse the rendering of `source` a second time.
fn reparse(source: &str) -> Result<Value, Error> {
    prattle::parse(&render(source))
}

/// Code and position of the parse error from re-reading `source`'s rendering.
fn reparse_error(source: &str) -> (&'static str, Span) {
    match reparse(source) {
        Err(Error::Parse(error)) => (error.code.as_str(), error.span),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn negation_renderings_read_back_unchanged() {
    for source in ["-x", "-(-x)", "-(-(-x))"] {
        let rendered = render(source);
        let again = prattle::to_string(&reparse(source).unwrap());
        assert_eq!(again.as_deref(), Some(rendered.as_str()), "source {source:?}");
    }
}

#[test]
fn operator_head_is_not_a_prefix_operator() {
    // `(+ 1 (* 2 3))`: unary `+` takes `1`, which is then called with `*`.
    assert_eq!(reparse_error("1 + 2 * 3"), ("E1001", Span::new(1, 7)));
}

#[test]
fn juxtaposed_operands_leave_the_paren_unclosed() {
    for source in ["f(a,b,c)", "a = 1"] {
        assert_eq!(reparse_error(source), ("E1003", Span::new(1, 1)), "source {source:?}");
    }
    // `do` is called on `(+ 1 2)`, whose unary `+` leaves `2` behind.
    assert_eq!(reparse_error("1 + 2; 3 + 4"), ("E1003", Span::new(1, 5)));
    // `(fn (a) (+ (+ a b) c))` stops at the innermost group.
    assert_eq!(reparse_error("a=>a+b+c"), ("E1003", Span::new(1, 12)));
}
