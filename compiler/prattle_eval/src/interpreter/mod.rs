//! The evaluator.
//!
//! [`Interpreter::evaluate`] reduces an AST to a [`Value`]. The core loop in
//! [`Interpreter::run`] is a trampoline: `let`, `do`, `if` and function
//! application replace the current node and environment and go round the
//! loop again instead of recursing, so a function calling itself in tail
//! position runs in constant host stack. Every other sub-evaluation goes
//! through [`Interpreter::eval_in`], which counts nesting depth and grows the
//! host stack when needed.

mod builder;
mod special_forms;

use std::cell::Cell;

use prattle_ir::errors::{not_callable, recursion_limit_exceeded, undefined_symbol};
use prattle_ir::{
    CallContext, Closure, Environment, EvalError, EvalResult, Heap, Host, Params, Value,
};
use prattle_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::SharedPrintHandler;

pub use builder::InterpreterBuilder;
pub(crate) use special_forms::SpecialForm;

use special_forms::Step;

/// Default limit on nested non-tail evaluations.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// A tree-walking interpreter with its own root environment.
///
/// Interpreters are single-threaded: values and environments are
/// reference-counted without synchronization.
pub struct Interpreter {
    root: Environment,
    print_handler: SharedPrintHandler,
    max_depth: usize,
    depth: Cell<usize>,
}

/// Decrements the depth counter when an evaluation frame is left, including
/// on error.
struct DepthGuard<'a>(&'a Cell<usize>);

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

impl Interpreter {
    /// An interpreter printing to stdout with the default depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The environment holding the builtins and every top-level binding.
    #[inline]
    pub fn root_env(&self) -> &Environment {
        &self.root
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Evaluate `ast` in `env`, or in the root environment if none is given.
    pub fn evaluate(&self, ast: &Value, env: Option<&Environment>) -> EvalResult {
        let env = env.unwrap_or(&self.root).clone();
        self.eval_in(ast.clone(), env)
    }

    /// One nested evaluation: checked against the depth limit and run with
    /// enough host stack.
    pub(crate) fn eval_in(&self, ast: Value, env: Environment) -> EvalResult {
        let _guard = self.enter()?;
        ensure_sufficient_stack(|| self.run(ast, env))
    }

    fn enter(&self) -> Result<DepthGuard<'_>, EvalError> {
        let depth = self.depth.get();
        if depth >= self.max_depth {
            debug!(limit = self.max_depth, "recursion limit reached");
            return Err(recursion_limit_exceeded(self.max_depth));
        }
        self.depth.set(depth + 1);
        Ok(DepthGuard(&self.depth))
    }

    fn run(&self, mut ast: Value, mut env: Environment) -> EvalResult {
        loop {
            ast = self.expand_macros(ast, &env)?;

            let items = match &ast {
                Value::List(items) => Heap::clone(items),
                atom => return resolve(atom, &env),
            };
            let Some(head) = items.first() else {
                return Ok(Value::Nil);
            };

            if let Some(form) = head.as_symbol().and_then(|name| SpecialForm::from_name(name)) {
                match self.eval_special_form(form, &items, &env)? {
                    Step::Return(value) => return Ok(value),
                    Step::Continue(next, scope) => {
                        ast = next;
                        env = scope;
                        continue;
                    }
                }
            }

            let mut values = self.eval_all(&items, &env)?.into_iter();
            let Some(callee) = values.next() else {
                return Ok(Value::Nil);
            };
            let args: Vec<Value> = values.collect();

            match callee {
                Value::Closure(closure) => {
                    trace!(params = ?closure.params.names(), "tail call");
                    env = closure.call_scope(args, None);
                    ast = closure.body.clone();
                }
                Value::Builtin(builtin) => {
                    trace!(builtin = builtin.name(), "builtin call");
                    return builtin.call(&CallContext::new(self, &env), args);
                }
                other => match fn_form(&other) {
                    Some(form) => {
                        let (body, scope) = bind_fn_form(form, args, &env)?;
                        ast = body;
                        env = scope;
                    }
                    None => return Err(not_callable(other.type_name())),
                },
            }
        }
    }

    /// Replace a macro call by its expansion until the node is no longer
    /// headed by a symbol bound to a macro.
    fn expand_macros(&self, mut ast: Value, env: &Environment) -> EvalResult {
        while let Some(closure) = macro_at_head(&ast, env) {
            let args = ast.as_list().map(|items| items[1..].to_vec()).unwrap_or_default();
            debug!(name = ast.head_symbol(), "expanding macro");
            ast = self.call_closure(&closure, args, None)?;
        }
        Ok(ast)
    }

    pub(crate) fn eval_all(&self, items: &[Value], env: &Environment) -> Result<Vec<Value>, EvalError> {
        items
            .iter()
            .map(|item| self.eval_in(item.clone(), env.clone()))
            .collect()
    }

    pub(crate) fn call_closure(
        &self,
        closure: &Closure,
        args: Vec<Value>,
        receiver: Option<Value>,
    ) -> EvalResult {
        let scope = closure.call_scope(args, receiver);
        self.eval_in(closure.body.clone(), scope)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for Interpreter {
    fn eval(&self, ast: &Value, env: &Environment) -> EvalResult {
        self.eval_in(ast.clone(), env.clone())
    }

    fn apply(&self, callee: &Value, args: Vec<Value>, env: &Environment) -> EvalResult {
        match callee {
            Value::Closure(closure) => self.call_closure(closure, args, None),
            Value::Builtin(builtin) => builtin.call(&CallContext::new(self, env), args),
            other => match fn_form(other) {
                Some(form) => {
                    let (body, scope) = bind_fn_form(form, args, env)?;
                    self.eval_in(body, scope)
                }
                None => Err(not_callable(other.type_name())),
            },
        }
    }

    fn print(&self, text: &str) {
        self.print_handler.print(text);
    }
}

fn resolve(atom: &Value, env: &Environment) -> EvalResult {
    match atom {
        Value::Symbol(name) => env.lookup(name).ok_or_else(|| undefined_symbol(name)),
        other => Ok(other.clone()),
    }
}

fn macro_at_head(ast: &Value, env: &Environment) -> Option<Heap<Closure>> {
    match env.lookup(ast.head_symbol()?)? {
        Value::Closure(closure) if closure.is_macro => Some(closure),
        _ => None,
    }
}

/// The elements of an unevaluated `(fn params body)` list used as a callee.
fn fn_form(value: &Value) -> Option<&[Value]> {
    match value.head_symbol() {
        Some(head) if SpecialForm::from_name(head) == Some(SpecialForm::Lambda) => value.as_list(),
        _ => None,
    }
}

/// Bind `args` for a list-form function. The scope is a copy of the
/// caller's environment, since a bare list has nothing captured.
fn bind_fn_form(
    form: &[Value],
    args: Vec<Value>,
    env: &Environment,
) -> Result<(Value, Environment), EvalError> {
    let params = Params::from_ast(form.get(1).unwrap_or(&Value::Nil))?;
    let scope = env.derive();
    params.bind(&scope, args);
    Ok((form.get(2).cloned().unwrap_or(Value::Nil), scope))
}
