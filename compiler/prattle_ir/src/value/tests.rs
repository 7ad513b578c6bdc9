use super::*;
use crate::errors::EvalErrorKind;
use crate::Environment;

fn sym(name: &str) -> Value {
    Value::symbol(name)
}

#[test]
fn test_truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(!Value::number(0.0).is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(!Value::list(vec![]).is_truthy());

    assert!(Value::Bool(true).is_truthy());
    assert!(Value::number(-1.0).is_truthy());
    assert!(Value::string("0").is_truthy());
    assert!(Value::list(vec![Value::Nil]).is_truthy());
    assert!(Value::record(Vec::<(String, Value)>::new()).is_truthy());
}

#[test]
fn test_strict_equality() {
    assert_eq!(Value::number(1.0), Value::number(1.0));
    assert_ne!(Value::number(1.0), Value::string("1"));
    assert_ne!(Value::Bool(true), Value::number(1.0));
    assert_ne!(Value::string("a"), sym("a"));
    assert_eq!(
        Value::list(vec![Value::number(1.0), Value::string("x")]),
        Value::list(vec![Value::number(1.0), Value::string("x")])
    );
}

#[test]
fn test_closures_compare_by_identity() {
    let make = || Value::closure(Closure::new(Params::default(), Value::Nil, Environment::new()));
    let a = make();
    let b = make();
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn test_records_are_shared_handles() {
    let Value::Record(record) = Value::record([("a", Value::number(1.0))]) else {
        panic!("expected record");
    };
    let alias = record.clone();
    alias.insert("b", Value::number(2.0));
    assert_eq!(record.get("b"), Some(Value::number(2.0)));
    assert_eq!(record.len(), 2);
}

#[test]
fn test_arg_list_marker() {
    let args = Value::arg_list(vec![sym("a"), sym("b")]);
    assert_eq!(args.head_symbol(), Some(ARGS_MARKER));
    assert_eq!(args.arg_list_items(), Some(&[sym("a"), sym("b")][..]));
    assert_eq!(Value::list(vec![sym("a")]).arg_list_items(), None);
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Nil.type_name(), "nil");
    assert_eq!(Value::number(1.0).type_name(), "number");
    assert_eq!(Value::string("").type_name(), "string");
    assert_eq!(sym("x").type_name(), "symbol");
    let closure = Closure::new(Params::default(), Value::Nil, Environment::new());
    assert_eq!(Value::closure(closure.clone()).type_name(), "function");
    assert_eq!(Value::closure(closure.to_macro()).type_name(), "macro");
}

#[test]
fn test_params_from_list_strips_marker() {
    let params = Params::from_ast(&Value::arg_list(vec![sym("a"), sym("b")])).unwrap();
    let names: Vec<&str> = params.names().iter().map(Name::as_str).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert!(params.rest().is_none());
}

#[test]
fn test_params_single_symbol() {
    let params = Params::from_ast(&sym("x")).unwrap();
    assert_eq!(params.names().len(), 1);
}

#[test]
fn test_params_rest() {
    let params = Params::from_ast(&Value::list(vec![sym("a"), sym("&"), sym("more")])).unwrap();
    let env = Environment::new();
    params.bind(
        &env,
        vec![Value::number(1.0), Value::number(2.0), Value::number(3.0)],
    );
    assert_eq!(env.lookup("a"), Some(Value::number(1.0)));
    assert_eq!(
        env.lookup("more"),
        Some(Value::list(vec![Value::number(2.0), Value::number(3.0)]))
    );
}

#[test]
fn test_params_missing_arguments_bind_nil() {
    let params = Params::from_ast(&Value::list(vec![sym("a"), sym("b")])).unwrap();
    let env = Environment::new();
    params.bind(&env, vec![Value::number(1.0)]);
    assert_eq!(env.lookup("b"), Some(Value::Nil));
}

#[test]
fn test_params_reject_non_symbols() {
    let err = Params::from_ast(&Value::list(vec![Value::number(1.0)])).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::InvalidParameter { .. }));

    let err = Params::from_ast(&Value::list(vec![sym("&")])).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::InvalidParameter { .. }));
}

#[test]
fn test_call_scope_copies_captured_env() {
    let captured = Environment::new();
    captured.define(Name::from("y"), Value::number(1.0));
    let closure = Closure::new(
        Params::from_ast(&sym("x")).unwrap(),
        Value::Nil,
        captured.clone(),
    );

    let scope = closure.call_scope(vec![Value::number(5.0)], Some(Value::string("me")));
    scope.define(Name::from("y"), Value::number(2.0));

    assert_eq!(scope.lookup("x"), Some(Value::number(5.0)));
    assert_eq!(scope.lookup(RECEIVER_NAME), Some(Value::string("me")));
    assert_eq!(captured.lookup("y"), Some(Value::number(1.0)));
    assert_eq!(captured.lookup("x"), None);
}
