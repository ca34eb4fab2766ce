//! Run results.

use std::time::Duration;

use tsfix_diagnostic::{ContributingDiagnostics, DiagnosticCode};
use tsfix_units::TestCategory;

/// Outcome of a single unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnitOutcome {
    /// Written under `positive/`.
    Positive,
    /// Written under `negative/`, with the codes it must fail with.
    Negative(ContributingDiagnostics),
    /// Not a classifiable unit (declaration, data file, empty, ambiguous).
    Ineligible,
    /// Oracle could not evaluate the unit and the run policy allows skipping.
    Skipped(String),
}

impl UnitOutcome {
    pub fn is_positive(&self) -> bool {
        matches!(self, UnitOutcome::Positive)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, UnitOutcome::Negative(_))
    }
}

/// Result of processing a single unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitResult {
    pub name: String,
    /// Set for classified units only.
    pub fixture_name: Option<String>,
    pub outcome: UnitOutcome,
}

/// Results for one test document.
#[derive(Clone, Debug, Default)]
pub struct DocumentSummary {
    pub id: String,
    pub units: Vec<UnitResult>,
    pub positive: usize,
    pub negative: usize,
    pub ineligible: usize,
    pub skipped: usize,
}

impl DocumentSummary {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentSummary {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn add_unit(&mut self, result: UnitResult) {
        match &result.outcome {
            UnitOutcome::Positive => self.positive += 1,
            UnitOutcome::Negative(_) => self.negative += 1,
            UnitOutcome::Ineligible => self.ineligible += 1,
            UnitOutcome::Skipped(_) => self.skipped += 1,
        }
        self.units.push(result);
    }

    /// Contributing diagnostics of the negative units, in unit order.
    pub fn contributions(&self) -> impl Iterator<Item = &ContributingDiagnostics> {
        self.units.iter().filter_map(|unit| match &unit.outcome {
            UnitOutcome::Negative(contributing) => Some(contributing),
            _ => None,
        })
    }
}

/// Totals for one category.
#[derive(Clone, Debug)]
pub struct CategorySummary {
    pub category: TestCategory,
    pub documents: usize,
    pub positive: usize,
    pub negative: usize,
    pub ineligible: usize,
    pub skipped: usize,
    pub duration: Duration,
}

impl CategorySummary {
    pub fn new(category: TestCategory) -> Self {
        CategorySummary {
            category,
            documents: 0,
            positive: 0,
            negative: 0,
            ineligible: 0,
            skipped: 0,
            duration: Duration::ZERO,
        }
    }

    pub fn add_document(&mut self, document: &DocumentSummary) {
        self.documents += 1;
        self.positive += document.positive;
        self.negative += document.negative;
        self.ineligible += document.ineligible;
        self.skipped += document.skipped;
    }

    /// Units that received a verdict.
    pub fn classified(&self) -> usize {
        self.positive + self.negative
    }
}

/// Summary of a complete run.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub oracle_version: String,
    pub categories: Vec<CategorySummary>,
    /// Aggregate table, ascending by code.
    pub table: Vec<(DiagnosticCode, String)>,
    pub duration: Duration,
}

impl RunSummary {
    pub fn new(oracle_version: impl Into<String>) -> Self {
        RunSummary {
            oracle_version: oracle_version.into(),
            ..Default::default()
        }
    }

    pub fn add_category(&mut self, summary: CategorySummary) {
        self.categories.push(summary);
    }

    pub fn category(&self, category: TestCategory) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn positive(&self) -> usize {
        self.categories.iter().map(|c| c.positive).sum()
    }

    pub fn negative(&self) -> usize {
        self.categories.iter().map(|c| c.negative).sum()
    }

    pub fn skipped(&self) -> usize {
        self.categories.iter().map(|c| c.skipped).sum()
    }

    pub fn classified(&self) -> usize {
        self.positive() + self.negative()
    }
}
