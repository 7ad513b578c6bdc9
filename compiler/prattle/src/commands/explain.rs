//! The `explain` command.

use prattle_diagnostic::ErrorCode;

/// Print what an error code means.
pub fn explain_error(code_str: &str) {
    let Some(code) = ErrorCode::from_code(&code_str.to_ascii_uppercase()) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E2001");
        std::process::exit(1);
    };

    let stage = if code.is_lexer_error() {
        "lexer"
    } else if code.is_parser_error() {
        "parser"
    } else {
        "evaluator"
    };
    println!("{} ({stage}): {}", code.as_str(), code.description());
}
