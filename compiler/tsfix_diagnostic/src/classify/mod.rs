//! Positive/negative classification of one unit's diagnostics.

use std::collections::BTreeMap;
use std::fmt;

use crate::record::{DiagnosticCode, DiagnosticRecord};
use crate::suppression::SuppressionSet;

/// Unsuppressed error codes of one unit, each with the first message seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContributingDiagnostics {
    entries: BTreeMap<DiagnosticCode, String>,
}

impl ContributingDiagnostics {
    fn insert_first(&mut self, code: DiagnosticCode, message: &str) {
        self.entries
            .entry(code)
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, code: DiagnosticCode) -> Option<&str> {
        self.entries.get(&code).map(String::as_str)
    }

    /// Entries in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (DiagnosticCode, &str)> + '_ {
        self.entries.iter().map(|(code, msg)| (*code, msg.as_str()))
    }

    pub fn codes(&self) -> impl Iterator<Item = DiagnosticCode> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which fixture directory a unit belongs in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum VerdictKind {
    Positive,
    Negative,
}

impl VerdictKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VerdictKind::Positive => "positive",
            VerdictKind::Negative => "negative",
        }
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No unsuppressed error remains: the unit should parse cleanly.
    Positive,
    /// The unit must fail with these codes. Never empty.
    Negative(ContributingDiagnostics),
}

impl Verdict {
    pub fn kind(&self) -> VerdictKind {
        match self {
            Verdict::Positive => VerdictKind::Positive,
            Verdict::Negative(_) => VerdictKind::Negative,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Verdict::Positive)
    }

    pub fn contributing(&self) -> Option<&ContributingDiagnostics> {
        match self {
            Verdict::Positive => None,
            Verdict::Negative(contributing) => Some(contributing),
        }
    }
}

/// Classify a unit from its raw diagnostics.
///
/// Non-error severities and suppressed codes are dropped. When a code
/// repeats, its first message is kept.
pub fn classify(records: &[DiagnosticRecord], suppressed: &SuppressionSet) -> Verdict {
    let mut contributing = ContributingDiagnostics::default();
    for record in records {
        if !record.severity.is_error() || suppressed.contains(record.code) {
            continue;
        }
        contributing.insert_first(record.code, &record.message);
    }

    if contributing.is_empty() {
        Verdict::Positive
    } else {
        Verdict::Negative(contributing)
    }
}
