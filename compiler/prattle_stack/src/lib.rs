//! Stack growth for the recursive descent in the parser and evaluator.
//!
//! Operator parsing and non-tail evaluation both recurse on the host stack.
//! Deeply nested source such as `((((((1))))))` or a non-tail recursive
//! function would otherwise overflow the thread's stack long before the
//! evaluator's own depth limit is reached.
//!
//! On native targets the stack is grown with `stacker`; on `wasm32` the
//! closure is called directly.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if the current one is
/// close to exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
