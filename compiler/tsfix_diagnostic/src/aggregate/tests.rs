use super::*;
use crate::classify::{classify, Verdict};
use crate::record::DiagnosticRecord;
use crate::suppression::SuppressionSet;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn contributing(entries: &[(u32, &str)]) -> ContributingDiagnostics {
    let records: Vec<_> = entries
        .iter()
        .map(|(code, message)| DiagnosticRecord::error(*code, *message))
        .collect();
    match classify(&records, &SuppressionSet::empty()) {
        Verdict::Negative(contributing) => contributing,
        Verdict::Positive => ContributingDiagnostics::default(),
    }
}

fn table(aggregate: &DiagnosticAggregate) -> Vec<(u32, String)> {
    aggregate
        .snapshot()
        .into_iter()
        .map(|(code, message)| (code.0, message))
        .collect()
}

#[test]
fn empty_aggregate() {
    let aggregate = DiagnosticAggregate::new();
    assert!(aggregate.is_empty());
    assert!(aggregate.snapshot().is_empty());
}

#[test]
fn snapshot_is_sorted_and_deduplicated() {
    let mut aggregate = DiagnosticAggregate::new();
    aggregate.absorb(&contributing(&[(2304, "Cannot find name 'a'."), (1005, "';' expected.")]));
    aggregate.absorb(&contributing(&[(1003, "Identifier expected."), (2304, "Cannot find name 'b'.")]));

    assert_eq!(
        table(&aggregate),
        vec![
            (1003, "Identifier expected.".to_string()),
            (1005, "';' expected.".to_string()),
            (2304, "Cannot find name 'a'.".to_string()),
        ]
    );
    assert_eq!(aggregate.len(), 3);
}

#[test]
fn snapshot_does_not_reset() {
    let mut aggregate = DiagnosticAggregate::new();
    aggregate.absorb(&contributing(&[(1005, "';' expected.")]));
    let first = aggregate.snapshot();
    assert_eq!(aggregate.snapshot(), first);
    assert_eq!(aggregate.len(), 1);
}

fn unit_diagnostics() -> impl Strategy<Value = Vec<Vec<u32>>> {
    prop::collection::vec(prop::collection::vec(1000u32..1020, 0..5), 0..8)
}

fn absorb_all(units: &[Vec<u32>]) -> DiagnosticAggregate {
    let mut aggregate = DiagnosticAggregate::new();
    for codes in units {
        let entries: Vec<(u32, String)> = codes.iter().map(|c| (*c, format!("TS{c}"))).collect();
        let borrowed: Vec<(u32, &str)> = entries.iter().map(|(c, m)| (*c, m.as_str())).collect();
        aggregate.absorb(&contributing(&borrowed));
    }
    aggregate
}

proptest! {
    #[test]
    fn absorb_is_commutative(units in unit_diagnostics()) {
        let forward = absorb_all(&units);
        let mut reversed_units = units.clone();
        reversed_units.reverse();
        let reversed = absorb_all(&reversed_units);
        prop_assert_eq!(table(&forward), table(&reversed));
    }

    #[test]
    fn absorb_is_idempotent(units in unit_diagnostics()) {
        let once = absorb_all(&units);
        let doubled: Vec<_> = units.iter().chain(units.iter()).cloned().collect();
        let twice = absorb_all(&doubled);
        prop_assert_eq!(table(&once), table(&twice));
    }
}
