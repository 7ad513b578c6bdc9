use pretty_assertions::assert_eq;
use prattle_ir::Span;

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected `*`")
        .with_label(Span::new(2, 3), "expression expected here")
        .with_note("`*` needs a left operand")
}

fn render(source: Option<&str>) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        if let Some(source) = source {
            emitter = emitter.with_source(source);
        }
        emitter.emit(&sample_diagnostic());
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_plain_output_without_source() {
    let text = render(None);
    assert_eq!(
        text,
        "error[E1001]: unexpected `*`\n  --> 2:3: expression expected here\n  = note: `*` needs a left operand\n"
    );
}

#[test]
fn test_excerpt_points_at_column() {
    let text = render(Some("a = 1\n* 2\n"));
    assert!(text.contains("2 | * 2\n"));
    assert!(text.contains(" |   ^ expression expected here\n"));
}

#[test]
fn test_color_output_contains_escapes() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);
    emitter.emit(&sample_diagnostic());
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1001"));
}

#[test]
fn test_summary_counts() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(2);
    emitter.emit_summary(0);
    emitter.emit_summary(1);
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "error: 2 errors emitted\nerror: 1 error emitted\n");
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("ALWAYS"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
}
