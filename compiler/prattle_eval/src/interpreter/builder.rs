//! `InterpreterBuilder` for creating interpreters with non-default settings.

use std::cell::Cell;

use prattle_ir::{Environment, Name, Value};

use super::{Interpreter, DEFAULT_MAX_DEPTH};
use crate::{builtins, stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// ```text
/// let interpreter = Interpreter::builder()
///     .print_handler(buffer_handler())
///     .max_depth(500)
///     .define("answer", Value::number(42.0))
///     .build();
/// ```
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_depth: usize,
    bindings: Vec<(Name, Value)>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            env: None,
            print_handler: None,
            max_depth: DEFAULT_MAX_DEPTH,
            bindings: Vec::new(),
        }
    }

    /// Use `env` as the root environment instead of a fresh one.
    ///
    /// Builtins are installed into it; bindings it already has with the same
    /// names are replaced.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Maximum number of nested non-tail evaluations. Zero is treated as one.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Add a root binding. Applied after the builtins, so it may shadow one.
    #[must_use]
    pub fn define(mut self, name: &str, value: Value) -> Self {
        self.bindings.push((Name::from(name), value));
        self
    }

    pub fn build(self) -> Interpreter {
        let root = self.env.unwrap_or_default();
        builtins::install(&root);
        for (name, value) in self.bindings {
            root.define(name, value);
        }

        Interpreter {
            root,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_depth: self.max_depth,
            depth: Cell::new(0),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
