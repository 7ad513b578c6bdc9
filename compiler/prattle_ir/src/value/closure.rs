use crate::errors::{invalid_parameter, EvalError};
use crate::Environment;

use super::{strip_arg_marker, Name, Record, Value};

/// Marks the parameter that collects the remaining arguments as a list.
pub const REST_MARKER: &str = "&";

/// Name bound to the receiver when a closure is called as a method.
pub const RECEIVER_NAME: &str = "this";

/// A function's formal parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    names: Vec<Name>,
    rest: Option<Name>,
}

impl Params {
    /// Read parameters from the second element of a `fn` form.
    ///
    /// Accepts a list of symbols (with an optional leading argument-list
    /// marker), a single symbol, or `nil` for no parameters. `& name` at the
    /// end of the list declares a rest parameter.
    pub fn from_ast(ast: &Value) -> Result<Params, EvalError> {
        let items: &[Value] = match ast {
            Value::Nil => &[],
            Value::Symbol(_) => std::slice::from_ref(ast),
            Value::List(items) => strip_arg_marker(items.as_slice()),
            other => {
                return Err(invalid_parameter(format!(
                    "expected a parameter list, found {}",
                    other.type_name()
                )))
            }
        };

        let mut names = Vec::with_capacity(items.len());
        let mut iter = items.iter();
        while let Some(item) = iter.next() {
            let Value::Symbol(name) = item else {
                return Err(invalid_parameter(format!(
                    "parameter must be a symbol, found {}",
                    item.type_name()
                )));
            };
            if name.as_str() == REST_MARKER {
                return match (iter.next(), iter.next()) {
                    (Some(Value::Symbol(rest)), None) => Ok(Params {
                        names,
                        rest: Some(rest.clone()),
                    }),
                    _ => Err(invalid_parameter(
                        "`&` must be followed by exactly one parameter name",
                    )),
                };
            }
            names.push(name.clone());
        }
        Ok(Params { names, rest: None })
    }

    pub fn names(&self) -> &[Name] {
        &self.names
    }

    pub fn rest(&self) -> Option<&Name> {
        self.rest.as_ref()
    }

    /// Bind `args` positionally into `scope`.
    ///
    /// Missing arguments bind `nil`; surplus arguments go to the rest
    /// parameter if there is one and are dropped otherwise.
    pub fn bind(&self, scope: &Environment, args: Vec<Value>) {
        let mut args = args.into_iter();
        for name in &self.names {
            scope.define(name.clone(), args.next().unwrap_or(Value::Nil));
        }
        if let Some(rest) = &self.rest {
            scope.define(rest.clone(), Value::list(args.collect()));
        }
    }
}

/// A user-defined function.
///
/// The captured environment is held by reference: later assignments made
/// directly in that environment are visible to the closure, while each call
/// runs in a fresh copy of it.
#[derive(Clone)]
pub struct Closure {
    pub params: Params,
    pub body: Value,
    pub env: Environment,
    /// Arbitrary properties attached with `.-`.
    pub props: Record,
    /// Macros receive their arguments unevaluated and their result is
    /// evaluated again in the caller's scope.
    pub is_macro: bool,
}

impl Closure {
    pub fn new(params: Params, body: Value, env: Environment) -> Self {
        Closure {
            params,
            body,
            env,
            props: Record::new(),
            is_macro: false,
        }
    }

    /// A copy of this closure flagged as a macro. The property bag is shared.
    #[must_use]
    pub fn to_macro(&self) -> Closure {
        Closure {
            is_macro: true,
            ..self.clone()
        }
    }

    /// Build the scope for one call: a copy of the captured environment
    /// with the receiver and arguments bound.
    pub fn call_scope(&self, args: Vec<Value>, receiver: Option<Value>) -> Environment {
        let scope = self.env.derive();
        if let Some(receiver) = receiver {
            scope.define(Name::from(RECEIVER_NAME), receiver);
        }
        self.params.bind(&scope, args);
        scope
    }
}
