//! Recast CLI
//!
//! Rewrites call sites to preferred replacements described by a pattern
//! config.

use std::io::IsTerminal;

use recastc::commands::{run_check, run_fix, run_patterns, CommandOptions, EXIT_FAILURE};
use recastc::tracing_setup::init_tracing;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let code = match command.as_str() {
        "check" | "fix" | "patterns" => {
            let mut options = match CommandOptions::parse(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!();
                    print_command_usage(command);
                    std::process::exit(EXIT_FAILURE);
                }
            };
            if command != "patterns" && options.inputs.is_empty() {
                print_command_usage(command);
                std::process::exit(EXIT_FAILURE);
            }
            let stdout = std::io::stdout();
            options.is_tty = stdout.is_terminal();
            let out = stdout.lock();
            match command.as_str() {
                "check" => run_check(&options, out),
                "fix" => run_fix(&options, out),
                _ => run_patterns(&options, out),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("recast {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn print_command_usage(command: &str) {
    match command {
        "patterns" => eprintln!("Usage: recast patterns <config.json> [--format=human|json]"),
        _ => {
            eprintln!("Usage: recast {command} <config.json> <paths...> [options]");
            eprintln!();
            eprintln!("Options:");
            eprintln!("  --format=<fmt>       Output format: human, json");
            eprintln!("  --color=<when>       Color output: auto, always, never");
            if command == "fix" {
                eprintln!("  --max-passes=<n>     Rewrite passes per file (default: 10)");
            }
        }
    }
}

fn print_usage() {
    println!("Recast: call-site rewrites driven by patterns");
    println!();
    println!("Usage: recast <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <config> <paths...>   Report call sites with a preferred replacement");
    println!("  fix <config> <paths...>     Rewrite those call sites in place");
    println!("  patterns <config>           Show the compiled patterns and config problems");
    println!("  help                        Show this help message");
    println!("  version                     Show version information");
    println!();
    println!("Options:");
    println!("  --format=<fmt>       Output format: human, json (default: human)");
    println!("  --color=<when>       Color output: auto, always, never (default: auto)");
    println!("  --max-passes=<n>     Rewrite passes per file for fix (default: 10)");
    println!();
    println!("Directories are searched for .ts, .tsx, .js and related files.");
    println!("Exit status: 0 clean, 1 findings reported, 2 the command could not run.");
    println!("Set RUST_LOG (e.g. RUST_LOG=recast_patterns=debug) for tracing output.");
}
