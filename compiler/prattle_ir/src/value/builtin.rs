use std::fmt;

use crate::{Environment, EvalResult};

use super::Value;

/// Services a builtin may ask of the evaluator that called it.
///
/// Implemented by the interpreter; builtins only ever see it through a
/// [`CallContext`].
pub trait Host {
    /// Evaluate `ast` in `env`.
    fn eval(&self, ast: &Value, env: &Environment) -> EvalResult;

    /// Call any callable value with already-evaluated arguments.
    fn apply(&self, callee: &Value, args: Vec<Value>, env: &Environment) -> EvalResult;

    /// Emit program output.
    fn print(&self, text: &str);
}

/// What a builtin receives besides its arguments.
pub struct CallContext<'a> {
    pub host: &'a dyn Host,
    /// The caller's environment.
    pub env: &'a Environment,
    /// The target of a `.` method call.
    pub receiver: Option<&'a Value>,
}

impl<'a> CallContext<'a> {
    pub fn new(host: &'a dyn Host, env: &'a Environment) -> Self {
        CallContext {
            host,
            env,
            receiver: None,
        }
    }

    #[must_use]
    pub fn with_receiver(mut self, receiver: &'a Value) -> Self {
        self.receiver = Some(receiver);
        self
    }
}

/// Signature of a host-provided function.
pub type BuiltinFn = fn(&CallContext<'_>, Vec<Value>) -> EvalResult;

/// A named host-provided function.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn call(&self, ctx: &CallContext<'_>, args: Vec<Value>) -> EvalResult {
        (self.func)(ctx, args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}
