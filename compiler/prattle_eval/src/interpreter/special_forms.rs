//! Special forms: list nodes whose head symbol is a keyword.
//!
//! A form either produces its value directly ([`Step::Return`]) or hands
//! the trampoline a new node and environment to continue with
//! ([`Step::Continue`]). Only the forms whose last action is evaluating a
//! sub-expression in tail position continue.

use prattle_ir::errors::{
    invalid_assignment_target, malformed_form, missing_condition, missing_then_branch,
    not_callable, type_mismatch, undefined_method,
};
use prattle_ir::{CallContext, Closure, Environment, EvalError, Name, Params, Value, ARGS_MARKER};
use tracing::{debug, trace};

use super::Interpreter;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SpecialForm {
    /// `set name value`
    Set,
    /// `macro f` or `~ f`
    Macro,
    /// `expr node`
    Quote,
    /// `.- target key [value]`
    Property,
    /// `. target method args...`
    Method,
    /// `try body (catch name handler)`
    Try,
    /// `fn params body` or `lambda params body`
    Lambda,
    /// `let (name value ...) body`
    Let,
    /// `do forms...`
    Do,
    /// `if cond then [else]`
    If,
    /// `args.. items...`
    ArgList,
}

impl SpecialForm {
    pub(crate) fn from_name(name: &str) -> Option<SpecialForm> {
        Some(match name {
            "set" => SpecialForm::Set,
            "macro" | "~" => SpecialForm::Macro,
            "expr" => SpecialForm::Quote,
            ".-" => SpecialForm::Property,
            "." => SpecialForm::Method,
            "try" => SpecialForm::Try,
            "fn" | "lambda" => SpecialForm::Lambda,
            "let" => SpecialForm::Let,
            "do" => SpecialForm::Do,
            "if" => SpecialForm::If,
            ARGS_MARKER => SpecialForm::ArgList,
            _ => return None,
        })
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            SpecialForm::Set => "set",
            SpecialForm::Macro => "macro",
            SpecialForm::Quote => "expr",
            SpecialForm::Property => ".-",
            SpecialForm::Method => ".",
            SpecialForm::Try => "try",
            SpecialForm::Lambda => "fn",
            SpecialForm::Let => "let",
            SpecialForm::Do => "do",
            SpecialForm::If => "if",
            SpecialForm::ArgList => ARGS_MARKER,
        }
    }
}

pub(super) enum Step {
    Return(Value),
    Continue(Value, Environment),
}

impl Interpreter {
    pub(super) fn eval_special_form(
        &self,
        form: SpecialForm,
        items: &[Value],
        env: &Environment,
    ) -> Result<Step, EvalError> {
        trace!(form = form.name(), operands = items.len() - 1, "special form");
        match form {
            SpecialForm::Set => self.eval_set(items, env).map(Step::Return),
            SpecialForm::Macro => self.eval_macro(items, env).map(Step::Return),
            SpecialForm::Quote => Ok(Step::Return(items.get(1).cloned().unwrap_or(Value::Nil))),
            SpecialForm::Property => self.eval_property(items, env).map(Step::Return),
            SpecialForm::Method => self.eval_method(items, env).map(Step::Return),
            SpecialForm::Try => self.eval_try(items, env),
            SpecialForm::Lambda => eval_lambda(items, env).map(Step::Return),
            SpecialForm::Let => self.eval_let(items, env),
            SpecialForm::Do => self.eval_do(items, env),
            SpecialForm::If => self.eval_if(items, env),
            SpecialForm::ArgList => self
                .eval_all(&items[1..], env)
                .map(|values| Step::Return(Value::list(values))),
        }
    }

    fn eval_set(&self, items: &[Value], env: &Environment) -> Result<Value, EvalError> {
        let name = match items.get(1) {
            Some(Value::Symbol(name)) => name.clone(),
            Some(Value::Str(name)) => Name::from(name.as_str()),
            Some(other) => return Err(invalid_assignment_target(other.type_name())),
            None => return Err(malformed_form("set", "expected a name")),
        };
        let value = match items.get(2) {
            Some(expr) => self.eval_in(expr.clone(), env.clone())?,
            None => Value::Nil,
        };
        trace!(%name, "set");
        env.define(name, value.clone());
        Ok(value)
    }

    fn eval_macro(&self, items: &[Value], env: &Environment) -> Result<Value, EvalError> {
        let Some(expr) = items.get(1) else {
            return Err(malformed_form("macro", "expected a function"));
        };
        match self.eval_in(expr.clone(), env.clone())? {
            Value::Closure(closure) => Ok(Value::closure(closure.to_macro())),
            other => Err(type_mismatch("macro", "a function", other.type_name())),
        }
    }

    fn eval_property(&self, items: &[Value], env: &Environment) -> Result<Value, EvalError> {
        let operands = self.eval_all(&items[1..], env)?;
        let [target, key, rest @ ..] = operands.as_slice() else {
            return Err(malformed_form(".-", "expected a target and a key"));
        };
        let new_value = rest.first();

        let bag = match target {
            Value::Record(record) => record,
            Value::Closure(closure) => &closure.props,
            Value::List(list) => {
                if new_value.is_some() {
                    return Err(type_mismatch(".-", "a record or function", "list"));
                }
                let index = key
                    .as_number()
                    .ok_or_else(|| type_mismatch(".-", "a numeric index", key.type_name()))?;
                return Ok(list_index(list, index).cloned().unwrap_or(Value::Nil));
            }
            other => {
                return Err(type_mismatch(
                    ".-",
                    "a record, list or function",
                    other.type_name(),
                ))
            }
        };

        let key = key.to_string();
        match new_value {
            Some(value) => {
                bag.insert(key, value.clone());
                Ok(value.clone())
            }
            None => Ok(bag.get(&key).unwrap_or(Value::Nil)),
        }
    }

    fn eval_method(&self, items: &[Value], env: &Environment) -> Result<Value, EvalError> {
        let mut operands = self.eval_all(&items[1..], env)?.into_iter();
        let (Some(target), Some(method)) = (operands.next(), operands.next()) else {
            return Err(malformed_form(".", "expected a target and a method name"));
        };
        let args: Vec<Value> = operands.collect();
        let method = method.to_string();

        let found = match &target {
            Value::Record(record) => record.get(&method),
            Value::Closure(closure) => closure.props.get(&method),
            _ => None,
        };
        let Some(callee) = found else {
            return Err(undefined_method(&method, target.type_name()));
        };

        trace!(%method, receiver = target.type_name(), "method call");
        match &callee {
            Value::Closure(closure) => self.call_closure(closure, args, Some(target.clone())),
            Value::Builtin(builtin) => {
                builtin.call(&CallContext::new(self, env).with_receiver(&target), args)
            }
            other => Err(not_callable(other.type_name())),
        }
    }

    fn eval_try(&self, items: &[Value], env: &Environment) -> Result<Step, EvalError> {
        let body = items.get(1).cloned().unwrap_or(Value::Nil);
        let error = match self.eval_in(body, env.clone()) {
            Ok(value) => return Ok(Step::Return(value)),
            Err(error) => error,
        };
        debug!(%error, "caught");

        let Some(clause) = items.get(2) else {
            return Ok(Step::Return(Value::Nil));
        };
        let Some([_, Value::Symbol(name), handler, ..]) = clause.as_list() else {
            return Err(malformed_form("try", "expected (catch name handler)"));
        };
        let scope = env.derive();
        scope.define(name.clone(), error.payload());
        Ok(Step::Continue(handler.clone(), scope))
    }

    fn eval_let(&self, items: &[Value], env: &Environment) -> Result<Step, EvalError> {
        let bindings = match items.get(1) {
            None | Some(Value::Nil) => &[][..],
            Some(list @ Value::List(_)) => list
                .arg_list_items()
                .or_else(|| list.as_list())
                .unwrap_or_default(),
            Some(other) => {
                return Err(malformed_form(
                    "let",
                    format!("bindings must be a list, found {}", other.type_name()),
                ))
            }
        };
        if bindings.len() % 2 != 0 {
            return Err(malformed_form("let", "bindings must come in name/value pairs"));
        }

        let scope = env.derive();
        for pair in bindings.chunks_exact(2) {
            let Value::Symbol(name) = &pair[0] else {
                return Err(invalid_assignment_target(pair[0].type_name()));
            };
            let value = self.eval_in(pair[1].clone(), scope.clone())?;
            scope.define(name.clone(), value);
        }

        let body = items.get(2).cloned().unwrap_or(Value::Nil);
        Ok(Step::Continue(body, scope))
    }

    fn eval_do(&self, items: &[Value], env: &Environment) -> Result<Step, EvalError> {
        let [_, effects @ .., last] = items else {
            return Ok(Step::Return(Value::Nil));
        };
        for form in effects {
            self.eval_in(form.clone(), env.clone())?;
        }
        Ok(Step::Continue(last.clone(), env.clone()))
    }

    fn eval_if(&self, items: &[Value], env: &Environment) -> Result<Step, EvalError> {
        let Some(condition) = items.get(1) else {
            return Err(missing_condition());
        };
        let Some(then_branch) = items.get(2) else {
            return Err(missing_then_branch());
        };

        let branch = if self.eval_in(condition.clone(), env.clone())?.is_truthy() {
            Some(then_branch)
        } else {
            items.get(3)
        };
        Ok(match branch {
            Some(branch) => Step::Continue(branch.clone(), env.clone()),
            None => Step::Return(Value::Nil),
        })
    }
}

fn eval_lambda(items: &[Value], env: &Environment) -> Result<Value, EvalError> {
    let params = Params::from_ast(items.get(1).unwrap_or(&Value::Nil))?;
    let body = items.get(2).cloned().unwrap_or(Value::Nil);
    Ok(Value::closure(Closure::new(params, body, env.clone())))
}

/// Element at a numeric index; fractional and negative indices miss.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "index is checked to be a non-negative whole number; oversized values miss"
)]
fn list_index(list: &[Value], index: f64) -> Option<&Value> {
    if index < 0.0 || index.fract() != 0.0 {
        return None;
    }
    list.get(index as usize)
}
