//! Prattle CLI

use prattle::commands::{
    eval_source, explain_error, lex_file, parse_file, run_file, run_repl,
};

fn main() {
    prattle::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: prattle run <file>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "eval" | "-e" => {
            if args.len() < 3 {
                eprintln!("Usage: prattle eval <source>");
                eprintln!("Example: prattle eval \"1 + 2 * 3\"");
                std::process::exit(1);
            }
            eval_source(&args[2..].join(" "));
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: prattle parse <file|->");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: prattle lex <file|->");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "repl" => run_repl(),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Prattle {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: prattle explain <ERROR_CODE>");
                eprintln!("Example: prattle explain E2001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pr"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Prattle {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: prattle <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Run a program");
    println!("  eval <source>        Evaluate source text and print the result");
    println!("  parse <file|->       Print the AST as an S-expression");
    println!("  lex <file|->         Print the token stream");
    println!("  repl                 Start an interactive session");
    println!("  explain <code>       Explain an error code (e.g., E2001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Log filter (default: warn)");
    println!("  PRATTLE_MAX_DEPTH    Maximum nested evaluation depth (default: 10000)");
    println!("  PRATTLE_COLOR        auto, always or never");
    println!();
    println!("Examples:");
    println!("  prattle run main.pr");
    println!("  prattle eval \"f = (x => x * 2); f(21)\"");
    println!("  echo \"1 + 2 * 3\" | prattle parse -");
    println!("  prattle explain E2003");
}
