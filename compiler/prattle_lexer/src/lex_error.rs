use prattle_diagnostic::{Diagnostic, ErrorCode};
use prattle_ir::Span;

/// Input that no rule could tokenize. The rest of its line was skipped.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("unable to tokenize {text:?} at {span}")]
pub struct LexError {
    pub span: Span,
    /// The skipped text, trimmed.
    pub text: String,
}

impl LexError {
    #[cold]
    pub fn unrecognized(span: Span, text: impl Into<String>) -> Self {
        LexError {
            span,
            text: text.into(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E0001)
            .with_message(format!("unable to tokenize {:?}", self.text))
            .with_label(self.span, "no rule matches here")
            .with_note("the rest of this line was skipped")
    }
}
