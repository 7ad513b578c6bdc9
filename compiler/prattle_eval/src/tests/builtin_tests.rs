use pretty_assertions::assert_eq;
use prattle_diagnostic::ErrorCode;
use prattle_ir::{EvalErrorKind, Value};

use super::{eval, eval_err, eval_with, form, interpreter, num, sym};
use crate::diagnostics::{error_code, to_diagnostic};

#[test]
fn booleans_are_bound() {
    assert_eq!(eval("true"), Value::Bool(true));
    assert_eq!(eval("false"), Value::Bool(false));
}

#[test]
fn plus_concatenates_strings() {
    assert_eq!(eval("'a' + 'b'"), Value::string("ab"));
    assert_eq!(eval("'n' + 1"), Value::string("n1"));
}

#[test]
fn unary_minus_negates() {
    assert_eq!(eval("x = 3; -x"), num(-3.0));
    assert_eq!(eval("-(2 * 4)"), num(-8.0));
}

#[test]
fn division() {
    assert_eq!(eval("10 / 4"), num(2.5));
    assert_eq!(eval_err("1 / 0").kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn arithmetic_rejects_non_numbers() {
    let err = eval_err("1 + true");
    assert_eq!(err.message, "+ expects numbers, got boolean");
    assert!(matches!(eval_err("list() * 2").kind, EvalErrorKind::TypeMismatch { .. }));
}

#[test]
fn equality_is_strict() {
    assert_eq!(eval("1 == '1'"), Value::Bool(false));
    assert_eq!(eval("1 != '1'"), Value::Bool(true));
    assert_eq!(eval("0 == false"), Value::Bool(false));
    assert_eq!(eval("list(1, 'a') == list(1, 'a')"), Value::Bool(true));
}

#[test]
fn ordering_on_numbers_and_strings() {
    assert_eq!(eval("1 < 2"), Value::Bool(true));
    assert_eq!(eval("2 <= 2"), Value::Bool(true));
    assert_eq!(eval("'b' > 'a'"), Value::Bool(true));
    assert_eq!(eval("'a' >= 'b'"), Value::Bool(false));
    assert!(matches!(eval_err("1 < 'b'").kind, EvalErrorKind::TypeMismatch { .. }));
}

#[test]
fn comparison_takes_two_arguments() {
    let ast = form(vec![sym("=="), num(1.0), num(2.0), num(3.0)]);
    let err = interpreter().evaluate(&ast, None).unwrap_err();
    assert_eq!(err.message, "== expects 2 arguments, got 3");
}

#[test]
fn list_and_map() {
    assert_eq!(eval("list()"), Value::list(vec![]));
    assert_eq!(
        eval("map(list(1, 2, 3), x => x * 2)"),
        Value::list(vec![num(2.0), num(4.0), num(6.0)])
    );
    assert_eq!(
        eval("neg = (x => -x); map(list(-1, 2), neg)"),
        Value::list(vec![num(1.0), num(-2.0)])
    );
}

#[test]
fn map_requires_a_list() {
    let err = eval_err("map(1, x => x)");
    assert_eq!(err.message, "map expects a list, got number");
}

#[test]
fn eva_evaluates_in_the_callers_scope() {
    assert_eq!(eval("eva(expr(1 + 2))"), num(3.0));
    assert_eq!(eval("f = (x => eva(expr(x * 10))); f(4)"), num(40.0));
    assert_eq!(eval("eva('text')"), Value::string("text"));
}

#[test]
fn print_writes_display_forms_without_separators() {
    let interpreter = interpreter();
    let result = eval_with(&interpreter, "print('a', 1, list(1, 'b'))").unwrap();
    assert_eq!(result, Value::Nil);
    assert_eq!(
        interpreter.print_handler().get_output(),
        "a1(1 \"b\")"
    );
}

#[test]
fn object_builds_a_record() {
    assert_eq!(
        eval("object('a', 1, 'b', 'two')"),
        Value::record([("a", num(1.0)), ("b", Value::string("two"))])
    );
    let err = eval_err("object('a')");
    assert!(matches!(err.kind, EvalErrorKind::ArgumentCount { .. }));
}

#[test]
fn builtins_render_by_name() {
    assert_eq!(format!("{}", eval("map")), "<builtin map>");
    assert!(crate::builtin_names().any(|name| name == "eva"));
}

#[test]
fn errors_map_to_codes() {
    assert_eq!(error_code(&eval_err("nope")), ErrorCode::E2001);
    assert_eq!(error_code(&eval_err("if()")), ErrorCode::E2002);
    assert_eq!(error_code(&eval_err("1()")), ErrorCode::E2003);
    assert_eq!(error_code(&eval_err("1 / 0")), ErrorCode::E2005);
    assert_eq!(error_code(&eval_err("throw(1)")), ErrorCode::E2007);

    let diagnostic = to_diagnostic(&eval_err("throw(1)"));
    assert_eq!(diagnostic.code, ErrorCode::E2007);
    assert_eq!(diagnostic.message, "uncaught exception: 1");
    assert_eq!(diagnostic.notes.len(), 1);
}
