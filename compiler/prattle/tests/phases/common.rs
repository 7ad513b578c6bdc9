//! Shared test utilities.

use prattle::{Environment, Value};

/// A private copy of the default interpreter's root environment, so tests
/// never see each other's bindings.
pub fn scratch_env() -> Environment {
    prattle::with_default_interpreter(|interpreter| interpreter.root_env().derive())
}

/// Evaluate `source` in a fresh scratch environment.
pub fn run(source: &str) -> Value {
    prattle::evaluate(source, Some(&scratch_env())).unwrap()
}

/// Parse `source` and render the AST.
pub fn render(source: &str) -> String {
    let ast = prattle::parse(source).unwrap();
    prattle::to_string(&ast).unwrap_or_else(|| format!("{ast:?}"))
}
