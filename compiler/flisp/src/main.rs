//! fLisp CLI

use std::io;

use flisp::{init_tracing, run_repl, stdout_output, ReplConfig, Session};
use flisp_eval::print;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        repl();
        return;
    }

    match args[1].as_str() {
        "repl" => repl(),
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: flisp eval <source>");
                std::process::exit(1);
            }
            let source = args[2..].join(" ");
            match Session::new().eval_source(&source) {
                Ok(value) => println!("{}", print(&value)),
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: flisp parse <source>");
                std::process::exit(1);
            }
            let source = args[2..].join(" ");
            match flisp_parse::parse(&source) {
                Ok(tree) => print!("{tree}"),
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("fLisp Version {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn repl() {
    let stdin = io::stdin();
    let output = stdout_output();
    let mut session = Session::new();
    if let Err(err) = run_repl(&ReplConfig::default(), stdin.lock(), &output, &mut session) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("fLisp - a small Lisp with S- and Q-expressions");
    println!();
    println!("Usage: flisp [command]");
    println!();
    println!("Commands:");
    println!("  (none), repl         Start the interactive read loop");
    println!("  eval <source>        Evaluate one expression and print the result");
    println!("  parse <source>       Print the parse tree of <source>");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=flisp_eval=trace   Log every builtin application to stderr");
}
