//! tsfix - parser fixture generation from the TypeScript conformance corpus.
//!
//! Every document under `tests/cases/{compiler,conformance}` is split into its
//! virtual source files. Each eligible unit is evaluated by a full-fidelity
//! type checker (the oracle), classified as positive or negative, and written
//! out as a fixture. Error codes that still make units negative are collected
//! into a single table.
//!
//! # Pipeline
//!
//! ```text
//! discovery ──► split ──► filter ──► oracle ──► classify
//!                                                  │
//!                               ┌──────────────────┴──────────┐
//!                               ▼                             ▼
//!                         sink (fixture)            aggregate ──► sink (table)
//! ```
//!
//! Splitting, filtering and naming live in `tsfix_units`; classification and
//! aggregation in `tsfix_diagnostic`.

use std::sync::Once;

pub mod commands;
pub mod config;
pub mod discovery;
pub mod oracle;
pub mod report;
pub mod runner;
pub mod sink;

pub use config::{ConfigError, RunConfig};
pub use oracle::{CommandOracle, Oracle, OracleError};
pub use report::{CategorySummary, DocumentSummary, RunSummary, UnitOutcome, UnitResult};
pub use runner::{AmbientPolicy, FixtureRunner, RunError, RunnerOptions};
pub use sink::{DryRunSink, FixtureSink, FsSink, SinkError};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `info`, or `debug` with
/// `debug` on, in which case events render as a per-document span tree.
/// Safe to call more than once.
pub fn init_tracing(debug: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let default_level = if debug { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        if debug {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
