//! tsfix CLI
//!
//! Generates positive/negative parser fixtures from the TypeScript corpus.

use tsfix::commands::{generate, split_file, EXIT_USAGE};
use tsfix::{init_tracing, RunConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Bare flags (or nothing at all) mean `generate`.
    let (command, rest) = match args.get(1).map(String::as_str) {
        Some("--help" | "-h") => ("help", &args[2..]),
        Some("--version") => ("version", &args[2..]),
        Some(first) if !first.starts_with('-') => (first, &args[2..]),
        _ => ("generate", args.get(1..).unwrap_or_default()),
    };

    match command {
        "generate" => {
            let config = match RunConfig::from_args(rest) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!();
                    eprintln!("Run `tsfix help` for the list of options.");
                    std::process::exit(EXIT_USAGE);
                }
            };
            init_tracing(config.debug);
            std::process::exit(generate(&config));
        }
        "split" => {
            let Some(path) = rest.first() else {
                eprintln!("Usage: tsfix split <file>");
                std::process::exit(EXIT_USAGE);
            };
            std::process::exit(split_file(path));
        }
        "help" => {
            print_usage();
        }
        "version" => {
            println!("tsfix {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn print_usage() {
    println!("tsfix - parser fixtures from the TypeScript conformance corpus");
    println!();
    println!("Usage: tsfix [generate] [options]");
    println!("       tsfix <command> [args]");
    println!();
    println!("Commands:");
    println!("  generate            Classify every test unit and write fixtures (default)");
    println!("  split <file>        Show how one test document splits into units");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Generate options:");
    println!("  --corpus=<dir>      TypeScript repository root (env: TS_REPO_DIR, default: ./typescript)");
    println!("  --out=<dir>         Fixture output directory (default: ./fixtures)");
    println!("  --oracle=<cmd>      Oracle command (env: TSFIX_ORACLE, default: node oracle/ts-oracle.mjs)");
    println!("  --category=<name>   Only process compiler or conformance (repeatable)");
    println!("  --filter=<substr>   Only process documents whose path contains <substr>");
    println!("  --dry-run           Classify without writing anything (env: NO_SAVE)");
    println!("  --no-parallel       Process documents sequentially");
    println!("  --jobs=<n>          Worker threads for parallel processing");
    println!("  --strict-ambient    Abort when the oracle cannot load ambient declarations");
    println!("  --debug, -v         Verbose, per-document logging (env: DEBUG)");
    println!();
    println!("Exit status: 0 on success, 1 on oracle or I/O failure, 2 on invalid arguments.");
    println!();
    println!("Examples:");
    println!("  tsfix --corpus=../TypeScript");
    println!("  tsfix --category=conformance --filter=es6/ --dry-run");
    println!("  tsfix split ../TypeScript/tests/cases/compiler/arrayLiterals.ts");
}
