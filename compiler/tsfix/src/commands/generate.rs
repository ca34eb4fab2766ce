//! The `generate` command: run the corpus through the oracle and write fixtures.

use std::fmt::Write as _;

use tsfix_diagnostic::DiagnosticCode;

use super::{EXIT_FAILURE, EXIT_OK};
use crate::config::RunConfig;
use crate::oracle::CommandOracle;
use crate::report::RunSummary;
use crate::runner::FixtureRunner;
use crate::sink::{DryRunSink, FixtureSink, FsSink};

/// Generate fixtures as configured and print the run report.
pub fn generate(config: &RunConfig) -> i32 {
    if !config.corpus_root.is_dir() {
        tracing::error!(
            "TypeScript repository not found at {} (set TS_REPO_DIR or --corpus)",
            config.corpus_root.display()
        );
        return EXIT_FAILURE;
    }
    let Some((program, args)) = config.oracle_command.split_first() else {
        tracing::error!("oracle command is empty");
        return EXIT_FAILURE;
    };

    let oracle = CommandOracle::new(program.clone(), args.to_vec());
    let sink: Box<dyn FixtureSink> = if config.dry_run {
        tracing::info!("dry run: nothing will be written");
        Box::new(DryRunSink)
    } else {
        Box::new(FsSink::new(&config.output_dir))
    };

    let runner = FixtureRunner::new(&oracle, &*sink).with_options(config.runner.clone());
    match runner.run(&config.corpus_root, &config.categories) {
        Ok(summary) => {
            print_run_summary(&summary, config);
            EXIT_OK
        }
        Err(e) => {
            tracing::error!(oracle = %oracle.command_line(), "fixture generation failed: {e}");
            EXIT_FAILURE
        }
    }
}

/// Render the aggregate table as `code, // message` lines.
pub fn format_table(entries: &[(DiagnosticCode, String)]) -> String {
    let mut out = String::new();
    for (code, message) in entries {
        let _ = writeln!(out, "{code}, // {message}");
    }
    out
}

fn print_run_summary(summary: &RunSummary, config: &RunConfig) {
    println!("Oracle: TypeScript {}", summary.oracle_version);
    println!();

    for category in &summary.categories {
        println!(
            "{}: {} documents, {} positive, {} negative, {} ineligible, {} skipped ({:.2?})",
            category.category,
            category.documents,
            category.positive,
            category.negative,
            category.ineligible,
            category.skipped,
            category.duration
        );
    }

    if !summary.table.is_empty() {
        println!();
        println!("Error codes to be supported ({}):", summary.table.len());
        print!("{}", format_table(&summary.table));
    }

    println!();
    println!("Fixture Summary:");
    println!(
        "  {} positive, {} negative, {} skipped ({} classified)",
        summary.positive(),
        summary.negative(),
        summary.skipped(),
        summary.classified()
    );
    println!("  Completed in {:.2?}", summary.duration);
    if config.dry_run {
        println!("  Dry run, nothing written");
    } else {
        println!("  Written to {}", config.output_dir.display());
    }
}
