//! Source positions.

use std::fmt;

/// A 1-based line/column position in source text.
///
/// Columns count characters, not bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// Position used for synthesized nodes with no source location.
    pub const DUMMY: Span = Span { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Span { line, column }
    }

    /// Build a span from 0-based indices, saturating at `u32::MAX`.
    pub fn from_indices(line_index: usize, column_index: usize) -> Self {
        let to_u32 = |n: usize| u32::try_from(n.saturating_add(1)).unwrap_or(u32::MAX);
        Span {
            line: to_u32(line_index),
            column: to_u32(column_index),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
