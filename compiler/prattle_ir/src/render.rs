//! S-expression rendering.

use std::fmt::Write as _;

use prattle_stack::ensure_sufficient_stack;

use crate::value::Value;

/// Render an AST as an S-expression.
///
/// Only lists render; any other input yields `None`. Nested atoms render as
/// their value: numbers in shortest form (`1.0` as `1`), strings quoted,
/// symbols bare.
pub fn to_string(ast: &Value) -> Option<String> {
    ast.is_list().then(|| render(ast))
}

/// Render any value in S-expression notation.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    ensure_sufficient_stack(|| match value {
        Value::Nil => out.push_str("nil"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Str(s) => write_quoted(out, s),
        Value::Symbol(name) => out.push_str(name),
        Value::List(items) => {
            out.push('(');
            write_separated(out, items, " ");
            out.push(')');
        }
        Value::Record(record) => {
            out.push('{');
            for (i, (key, value)) in record.entries().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                write_value(out, value);
            }
            out.push('}');
        }
        Value::Closure(closure) => {
            out.push_str(if closure.is_macro { "<macro (" } else { "<fn (" });
            let mut first = true;
            for name in closure.params.names() {
                if !first {
                    out.push(' ');
                }
                first = false;
                out.push_str(name);
            }
            if let Some(rest) = closure.params.rest() {
                if !first {
                    out.push(' ');
                }
                out.push_str("& ");
                out.push_str(rest);
            }
            out.push_str(")>");
        }
        Value::Builtin(builtin) => {
            let _ = write!(out, "<builtin {}>", builtin.name());
        }
    });
}

fn write_separated(out: &mut String, items: &[Value], separator: &str) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_value(out, item);
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
}
