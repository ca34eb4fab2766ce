//! Run-wide table of codes the target parser still has to report.

use rustc_hash::FxHashMap;

use crate::classify::ContributingDiagnostics;
use crate::record::DiagnosticCode;

/// Accumulates contributing diagnostics across every negative unit.
///
/// On a code collision the message absorbed first is kept.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticAggregate {
    entries: FxHashMap<DiagnosticCode, String>,
}

impl DiagnosticAggregate {
    pub fn new() -> Self {
        DiagnosticAggregate::default()
    }

    pub fn absorb(&mut self, contributing: &ContributingDiagnostics) {
        for (code, message) in contributing.iter() {
            self.entries
                .entry(code)
                .or_insert_with(|| message.to_string());
        }
    }

    /// Entries sorted ascending by code. Does not reset the aggregate.
    pub fn snapshot(&self) -> Vec<(DiagnosticCode, String)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(code, message)| (*code, message.clone()))
            .collect();
        entries.sort_unstable_by_key(|(code, _)| *code);
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
