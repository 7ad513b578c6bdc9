//! Functions bound in every root environment.

use std::cmp::Ordering;

use prattle_ir::errors::{division_by_zero, thrown, type_mismatch, wrong_arg_count};
use prattle_ir::{Builtin, CallContext, Environment, EvalError, EvalResult, Name, Record, Value};

const BUILTINS: &[Builtin] = &[
    Builtin::new("+", add),
    Builtin::new("-", subtract),
    Builtin::new("*", multiply),
    Builtin::new("/", divide),
    Builtin::new("==", equal),
    Builtin::new("!=", not_equal),
    Builtin::new("<", less),
    Builtin::new("<=", less_equal),
    Builtin::new(">", greater),
    Builtin::new(">=", greater_equal),
    Builtin::new("list", list),
    Builtin::new("map", map),
    Builtin::new("eva", eva),
    Builtin::new("throw", throw),
    Builtin::new("print", print),
    Builtin::new("object", object),
];

/// Bind `true`, `false` and every builtin function in `env`.
pub(crate) fn install(env: &Environment) {
    env.define(Name::from("true"), Value::Bool(true));
    env.define(Name::from("false"), Value::Bool(false));
    for builtin in BUILTINS {
        env.define(Name::from(builtin.name()), Value::builtin(*builtin));
    }
}

/// Names of all builtin functions, in definition order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(Builtin::name)
}

fn number(operation: &str, value: &Value) -> Result<f64, EvalError> {
    value
        .as_number()
        .ok_or_else(|| type_mismatch(operation, "numbers", value.type_name()))
}

fn binary<'a>(name: &str, args: &'a [Value]) -> Result<(&'a Value, &'a Value), EvalError> {
    match args {
        [a, b] => Ok((a, b)),
        _ => Err(wrong_arg_count(name, "2", args.len())),
    }
}

/// Sum of numbers, or the concatenation of every argument's printed form if
/// any argument is a string.
fn add(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    if args.iter().any(|arg| matches!(arg, Value::Str(_))) {
        let joined: String = args.iter().map(ToString::to_string).collect();
        return Ok(Value::string(joined));
    }
    let mut sum = 0.0;
    for arg in &args {
        sum += number("+", arg)?;
    }
    Ok(Value::number(sum))
}

/// Binary subtraction folds left; a single operand is negated.
fn subtract(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let Some((first, rest)) = args.split_first() else {
        return Err(wrong_arg_count("-", "at least 1", 0));
    };
    let first = number("-", first)?;
    if rest.is_empty() {
        return Ok(Value::number(-first));
    }
    let mut result = first;
    for arg in rest {
        result -= number("-", arg)?;
    }
    Ok(Value::number(result))
}

fn multiply(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let mut product = 1.0;
    for arg in &args {
        product *= number("*", arg)?;
    }
    Ok(Value::number(product))
}

fn divide(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let Some((first, rest)) = args.split_first() else {
        return Err(wrong_arg_count("/", "at least 1", 0));
    };
    let mut result = number("/", first)?;
    for arg in rest {
        let divisor = number("/", arg)?;
        if divisor == 0.0 {
            return Err(division_by_zero());
        }
        result /= divisor;
    }
    Ok(Value::number(result))
}

fn equal(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let (a, b) = binary("==", &args)?;
    Ok(Value::Bool(a == b))
}

fn not_equal(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let (a, b) = binary("!=", &args)?;
    Ok(Value::Bool(a != b))
}

/// Order two numbers or two strings.
fn compare(name: &str, args: &[Value]) -> Result<Option<Ordering>, EvalError> {
    let (a, b) = binary(name, args)?;
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(x.partial_cmp(y)),
        (Value::Str(x), Value::Str(y)) => Ok(Some(x.as_str().cmp(y.as_str()))),
        _ => Err(type_mismatch(
            name,
            "two numbers or two strings",
            &format!("{} and {}", a.type_name(), b.type_name()),
        )),
    }
}

fn less(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let ord = compare("<", &args)?;
    Ok(Value::Bool(ord == Some(Ordering::Less)))
}

fn less_equal(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let ord = compare("<=", &args)?;
    Ok(Value::Bool(matches!(ord, Some(Ordering::Less | Ordering::Equal))))
}

fn greater(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let ord = compare(">", &args)?;
    Ok(Value::Bool(ord == Some(Ordering::Greater)))
}

fn greater_equal(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let ord = compare(">=", &args)?;
    Ok(Value::Bool(matches!(
        ord,
        Some(Ordering::Greater | Ordering::Equal)
    )))
}

fn list(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    Ok(Value::list(args))
}

/// `map(list, f)`: a new list of `f(item)` for every item.
fn map(ctx: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let (items, func) = binary("map", &args)?;
    let Value::List(items) = items else {
        return Err(type_mismatch("map", "a list", items.type_name()));
    };
    let mapped = items
        .iter()
        .map(|item| ctx.host.apply(func, vec![item.clone()], ctx.env))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::list(mapped))
}

/// Evaluate a value as code in the caller's environment.
fn eva(ctx: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let [ast] = args.as_slice() else {
        return Err(wrong_arg_count("eva", "1", args.len()));
    };
    ctx.host.eval(ast, ctx.env)
}

fn throw(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    let payload = args.into_iter().next().unwrap_or(Value::Nil);
    Err(thrown(payload))
}

fn print(ctx: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    for arg in &args {
        ctx.host.print(&arg.to_string());
    }
    Ok(Value::Nil)
}

/// `object(k1, v1, k2, v2, ...)`: a record with the given entries.
fn object(_: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
    if args.len() % 2 != 0 {
        return Err(wrong_arg_count("object", "an even number of", args.len()));
    }
    let record = Record::new();
    for pair in args.chunks_exact(2) {
        record.insert(pair[0].to_string(), pair[1].clone());
    }
    Ok(Value::Record(record))
}
