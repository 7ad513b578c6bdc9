use pretty_assertions::assert_eq;
use prattle_diagnostic::ErrorCode;
use prattle_ir::{to_string, Span, Value};
use proptest::prelude::*;

use super::*;

fn parse_source(source: &str) -> Result<Value, ParseError> {
    let out = prattle_lexer::lex(source);
    parse(&out.tokens)
}

fn render(source: &str) -> String {
    let ast = parse_source(source).unwrap();
    to_string(&ast).unwrap_or_else(|| format!("{ast:?}"))
}

fn parse_err(source: &str) -> ParseError {
    parse_source(source).unwrap_err()
}

#[test]
fn test_precedence() {
    assert_eq!(render("1 + 2"), "(+ 1 2)");
    assert_eq!(render("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(render("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(render("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(render("a < b + 1"), "(< a (+ b 1))");
    assert_eq!(render("a == b != c"), "(!= (== a b) c)");
}

#[test]
fn test_assignment() {
    assert_eq!(render("a = 1"), "(set a 1)");
    assert_eq!(render("a = 1 + 2"), "(set a (+ 1 2))");
    assert_eq!(render("a = b == c"), "(set a (== b c))");
}

#[test]
fn test_sequence() {
    assert_eq!(render("1 + 2; 3 + 4"), "(do (+ 1 2) (+ 3 4))");
    assert_eq!(render("a; b; c"), "(do a b c)");
    assert_eq!(render("a = 1; a"), "(do (set a 1) a)");
}

#[test]
fn test_trailing_semicolon_is_dropped() {
    assert_eq!(render("a = 1;"), "(set a 1)");
}

#[test]
fn test_calls() {
    assert_eq!(render("f(a,b,c)"), "(f a b c)");
    assert_eq!(render("f()"), "(f)");
    assert_eq!(render("1+f(n, m(1+2))"), "(+ 1 (f n (m (+ 1 2))))");
    assert_eq!(render("f(1)(2)"), "((f 1) 2)");
}

#[test]
fn test_lambdas() {
    assert_eq!(render("a=>a+b+c"), "(fn (a) (+ (+ a b) c))");
    assert_eq!(render("(a,b)=>a+b+c"), "(fn (a b) (+ (+ a b) c))");
    assert_eq!(render("() => 1"), "(fn () 1)");
}

#[test]
fn test_lambda_definition_and_call() {
    assert_eq!(
        render("f=((a,b)=>a+b);f(2,4)"),
        "(do (set f (fn (a b) (+ a b))) (f 2 4))"
    );
    assert_eq!(render("((a,b)=>a+b)(2,4)"), "((fn (a b) (+ a b)) 2 4)");
}

#[test]
fn test_lambda_argument_keeps_sibling_arguments() {
    assert_eq!(render("f(x => x, 2)"), "(f (fn (x) x) 2)");
    assert_eq!(
        render("map(list(1, 2), x => x * 2)"),
        "(map (list 1 2) (fn (x) (* x 2)))"
    );
}

#[test]
fn test_apply_arrow() {
    assert_eq!(render("1->f"), "(f 1)");
    assert_eq!(render("(1, 2)->f"), "(f 1 2)");
    assert_eq!(render("x -> f -> g"), "(g (f x))");
}

#[test]
fn test_unary() {
    assert_eq!(render("-1 + 2"), "(+ -1 2)");
    assert_eq!(render("-x * 2"), "(* (- x) 2)");
    assert_eq!(render("2 - -3"), "(- 2 -3)");
    assert_eq!(render("+x + 1"), "(+ x 1)");
}

#[test]
fn test_literals() {
    assert_eq!(parse_source("42").unwrap(), Value::number(42.0));
    assert_eq!(parse_source(".5").unwrap(), Value::number(0.5));
    assert_eq!(parse_source("'hi'").unwrap(), Value::string("hi"));
    assert_eq!(parse_source("abc").unwrap(), Value::symbol("abc"));
    assert_eq!(render(r#"print("a b")"#), r#"(print "a b")"#);
}

#[test]
fn test_group_of_several_items_is_argument_list() {
    assert_eq!(render("(1, 2, 3)"), "(args.. 1 2 3)");
    assert_eq!(render("()"), "(args..)");
    assert_eq!(parse_source("(7)").unwrap(), Value::number(7.0));
}

#[test]
fn test_empty_program() {
    assert_eq!(render(""), "()");
    assert_eq!(render("   \n  "), "()");
}

#[test]
fn test_juxtaposed_expressions_are_sequenced() {
    assert_eq!(render("1 2"), "(do 1 2)");
}

#[test]
fn test_unexpected_prefix_reports_position() {
    let err = parse_err("1 +\n  * 2");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.span, Span::new(2, 3));
    assert!(err.to_string().contains("line 2, column 3"));
}

#[test]
fn test_missing_operand() {
    let err = parse_err("1 +");
    assert_eq!(err.code, ErrorCode::E1002);

    let err = parse_err("f(1 *)");
    assert_eq!(err.code, ErrorCode::E1002);
}

#[test]
fn test_unclosed_paren() {
    let err = parse_err("f(1, 2");
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.span, Span::new(1, 2));
}

#[test]
fn test_unmatched_close_paren() {
    let err = parse_err("1)");
    assert_eq!(err.code, ErrorCode::E1004);
    assert_eq!(err.span, Span::new(1, 2));
}

#[test]
fn test_leading_comma() {
    let err = parse_err("f(, 1)");
    assert_eq!(err.code, ErrorCode::E1006);
}

#[test]
fn test_diagnostic_conversion() {
    let diag = parse_err("(1").to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.primary_span(), Some(Span::new(1, 1)));
}

#[test]
fn test_deep_nesting() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_source(&source).unwrap(), Value::number(1.0));
}

proptest! {
    #[test]
    fn parsing_never_panics(source in "[a-z0-9 +*/=;,()<>!.'\"-]{0,40}") {
        let _ = parse_source(&source);
    }

    #[test]
    fn rendering_is_deterministic(
        a in "[a-z]{1,4}",
        b in 0u32..1000,
        c in "[a-z]{1,4}",
        op in prop::sample::select(vec!["+", "-", "*", "/", "==", "<"]),
    ) {
        let source = format!("{a} {op} {b} * {c}");
        let first = render(&source);
        let second = render(&source);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.starts_with('('));
    }

    #[test]
    fn call_arguments_keep_their_order(args in prop::collection::vec(0u32..100, 1..8)) {
        let list: Vec<String> = args.iter().map(ToString::to_string).collect();
        let rendered = render(&format!("f({})", list.join(", ")));
        prop_assert_eq!(rendered, format!("(f {})", list.join(" ")));
    }
}
