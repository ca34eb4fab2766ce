//! Diagnostic classification for tsfix.
//!
//! Raw oracle diagnostics flow through three steps:
//!
//! ```text
//! [DiagnosticRecord] ──► classify(records, &SuppressionSet) ──► Verdict
//!                                                                  │
//!                                            Negative(contributing)│
//!                                                                  ▼
//!                                          DiagnosticAggregate::absorb()
//!                                                                  │
//!                                                                  ▼
//!                                          snapshot() ──► sorted table
//! ```
//!
//! Everything here is pure: the suppression set is read-only and the
//! aggregate is an explicit value owned by the caller.

mod aggregate;
mod classify;
mod record;
mod suppression;

pub use aggregate::DiagnosticAggregate;
pub use classify::{classify, ContributingDiagnostics, Verdict, VerdictKind};
pub use record::{DiagnosticCode, DiagnosticRecord, Severity};
pub use suppression::SuppressionSet;
