use pretty_assertions::assert_eq;
use prattle::{Error, Input, Value};

use crate::common::{run, scratch_env};

#[test]
fn arithmetic() {
    assert_eq!(run("1 + 1"), Value::number(2.0));
    assert_eq!(run("2 + 3 * 4"), Value::number(14.0));
    assert_eq!(run("((x, y) => x + y)(2, 3)"), Value::number(5.0));
}

#[test]
fn evaluating_a_parsed_ast() {
    let ast = prattle::parse("f = (n => n * n); f(7)").unwrap();
    let env = scratch_env();
    assert_eq!(
        prattle::evaluate(Input::Ast(&ast), Some(&env)).unwrap(),
        Value::number(49.0)
    );
    assert!(env.contains("f"));
}

#[test]
fn default_interpreter_keeps_top_level_bindings() {
    prattle::evaluate("phase_eval_counter = 10", None).unwrap();
    assert_eq!(
        prattle::evaluate("phase_eval_counter + 1", None).unwrap(),
        Value::number(11.0)
    );
}

#[test]
fn function_calls_do_not_change_caller_bindings() {
    assert_eq!(run("y = 1; f = (x => y = y + x); f(10); y"), Value::number(1.0));
}

#[test]
fn macros_get_unevaluated_forms() {
    let source = "swap = macro((a, b) => list(expr(list), b, a)); swap(1 + 1, 'x')";
    assert_eq!(
        run(source),
        Value::list(vec![Value::string("x"), Value::number(2.0)])
    );
}

#[test]
fn deep_tail_recursion() {
    let source = "loop = (n => if(n == 0, 0, loop(n - 1))); loop(100000)";
    assert_eq!(run(source), Value::number(0.0));
}

#[test]
fn structured_payload_round_trip() {
    let caught = run("try(throw(object('code', 42)), catch(e, e))");
    assert_eq!(caught, Value::record([("code", Value::number(42.0))]));
}

#[test]
fn parse_failures_surface_as_parse_errors() {
    let err = prattle::evaluate("1 +", None).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn runtime_failures_surface_as_eval_errors() {
    let err = prattle::evaluate("undefined_in_phase_tests", Some(&scratch_env())).unwrap_err();
    let Error::Eval(eval_error) = &err else {
        panic!("expected an evaluation error, got {err:?}");
    };
    assert_eq!(eval_error.to_string(), "undefined symbol \"undefined_in_phase_tests\"");
    assert_eq!(err.to_diagnostic().code.as_str(), "E2001");
}

#[test]
fn uncaught_throw_diagnostic() {
    let err = prattle::evaluate("throw('bad')", Some(&scratch_env())).unwrap_err();
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.code.as_str(), "E2007");
    assert_eq!(diagnostic.message, "uncaught exception: bad");
}

#[test]
fn embedding_with_a_captured_print_handler() {
    let interpreter = prattle::Interpreter::builder()
        .print_handler(prattle::buffer_handler())
        .build();
    let ast = prattle::parse("print('sum: ', 1 + 2)").unwrap();
    interpreter.evaluate(&ast, None).unwrap();
    assert_eq!(interpreter.print_handler().get_output(), "sum: 3");
}

#[test]
fn if_truthiness() {
    assert_eq!(run("if(0, 1, 2)"), Value::number(2.0));
    assert_eq!(run("if('', 1, 2)"), Value::number(2.0));
    assert_eq!(run("if(list(), 1, 2)"), Value::number(2.0));
    // Only the empty string is a false string.
    assert_eq!(run("if('0', 1, 2)"), Value::number(1.0));
    assert_eq!(run("if('a', 1, 2)"), Value::number(1.0));
}
