//! Fixture generation engine.
//!
//! Walks each category of the corpus, splits every document into units,
//! evaluates eligible units with the oracle, classifies them, writes
//! fixtures, and folds negative units into the aggregate table.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tsfix_diagnostic::{classify, DiagnosticAggregate, SuppressionSet, Verdict};
use tsfix_units::{
    eligible_content, fixture_name, split_document, CompilerSettings, TestCategory, TestDocument,
    TestUnit,
};

use crate::discovery::{category_root, discover_documents, DocumentPath};
use crate::oracle::{EvaluationRequest, Oracle, OracleError, OracleOptions};
use crate::report::{CategorySummary, DocumentSummary, RunSummary, UnitOutcome, UnitResult};
use crate::sink::{FixtureSink, SinkError};

/// What to do when the oracle cannot load ambient declarations for a unit.
///
/// Applies uniformly to the whole run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AmbientPolicy {
    /// Record the unit as skipped and continue.
    #[default]
    Skip,
    /// Abort the run like any other oracle failure.
    Fatal,
}

/// Runner knobs. None of them changes classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Only process documents whose id contains this substring.
    pub filter: Option<String>,
    /// Process documents of a category on a thread pool.
    pub parallel: bool,
    /// Worker count for the pool; rayon's default when unset.
    pub jobs: Option<usize>,
    pub ambient: AmbientPolicy,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        RunnerOptions {
            filter: None,
            parallel: true,
            jobs: None,
            ambient: AmbientPolicy::Skip,
        }
    }
}

/// Failures that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to query oracle version: {0}")]
    OracleVersion(#[source] OracleError),
    #[error("oracle failed on {document} ({unit}): {source}")]
    Oracle {
        document: String,
        unit: String,
        #[source]
        source: OracleError,
    },
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("failed to read corpus at {}: {source}", path.display())]
    Corpus {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Drives a corpus run against an oracle and a sink.
pub struct FixtureRunner<'a> {
    oracle: &'a dyn Oracle,
    sink: &'a dyn FixtureSink,
    suppressed: SuppressionSet,
    options: RunnerOptions,
}

impl<'a> FixtureRunner<'a> {
    pub fn new(oracle: &'a dyn Oracle, sink: &'a dyn FixtureSink) -> Self {
        FixtureRunner {
            oracle,
            sink,
            suppressed: SuppressionSet::curated(),
            options: RunnerOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: RunnerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_suppression(mut self, suppressed: SuppressionSet) -> Self {
        self.suppressed = suppressed;
        self
    }

    /// Run every category found under the TypeScript repository root.
    pub fn run(
        &self,
        corpus_root: &Path,
        categories: &[TestCategory],
    ) -> Result<RunSummary, RunError> {
        let start = Instant::now();

        let version = self.oracle.version().map_err(RunError::OracleVersion)?;
        tracing::info!(%version, "using oracle");

        self.sink.prepare(categories)?;

        let mut summary = RunSummary::new(version);
        let mut aggregate = DiagnosticAggregate::new();

        for &category in categories {
            let category_start = Instant::now();
            let root = category_root(corpus_root, category);
            let documents = self.discover(&root)?;
            tracing::info!(%category, documents = documents.len(), "processing test cases");

            let results = if self.options.parallel {
                self.run_parallel(category, &documents)?
            } else {
                self.run_sequential(category, &documents)?
            };

            // Aggregation stays on this thread, in corpus order.
            let mut category_summary = CategorySummary::new(category);
            for document in &results {
                for contributing in document.contributions() {
                    aggregate.absorb(contributing);
                }
                category_summary.add_document(document);
            }
            category_summary.duration = category_start.elapsed();
            tracing::info!(
                %category,
                positive = category_summary.positive,
                negative = category_summary.negative,
                skipped = category_summary.skipped,
                "category done"
            );
            summary.add_category(category_summary);
        }

        summary.table = aggregate.snapshot();
        self.sink.store_table(&summary.table)?;
        summary.duration = start.elapsed();
        Ok(summary)
    }

    fn discover(&self, root: &Path) -> Result<Vec<DocumentPath>, RunError> {
        let mut documents = discover_documents(root).map_err(|source| RunError::Corpus {
            path: root.to_path_buf(),
            source,
        })?;
        if let Some(filter) = &self.options.filter {
            documents.retain(|d| d.id.contains(filter.as_str()));
        }
        Ok(documents)
    }

    fn run_sequential(
        &self,
        category: TestCategory,
        documents: &[DocumentPath],
    ) -> Result<Vec<DocumentSummary>, RunError> {
        documents
            .iter()
            .map(|document| self.load_and_process(category, document))
            .collect()
    }

    /// Process documents on a scoped rayon pool.
    ///
    /// Results come back in input order, so aggregation and reporting match a
    /// sequential run.
    fn run_parallel(
        &self,
        category: TestCategory,
        documents: &[DocumentPath],
    ) -> Result<Vec<DocumentSummary>, RunError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(jobs) = self.options.jobs {
            builder = builder.num_threads(jobs);
        }

        builder
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| {
                    documents
                        .par_iter()
                        .map(|document| self.load_and_process(category, document))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                self.run_sequential(category, documents)
            })
    }

    fn load_and_process(
        &self,
        category: TestCategory,
        document: &DocumentPath,
    ) -> Result<DocumentSummary, RunError> {
        let bytes = std::fs::read(&document.path).map_err(|source| RunError::Corpus {
            path: document.path.clone(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        self.process_document(&TestDocument::new(category, &document.id, text))
    }

    /// Split, classify and store every unit of one document.
    pub fn process_document(&self, document: &TestDocument) -> Result<DocumentSummary, RunError> {
        let _span = tracing::debug_span!("document", id = %document.id).entered();

        let split = split_document(document);
        tracing::debug!(units = split.units.len(), "split document");

        let mut summary = DocumentSummary::new(&document.id);
        for unit in &split.units {
            let result = self.process_unit(document, unit, &split.settings)?;
            summary.add_unit(result);
        }
        Ok(summary)
    }

    fn process_unit(
        &self,
        document: &TestDocument,
        unit: &TestUnit,
        settings: &CompilerSettings,
    ) -> Result<UnitResult, RunError> {
        let _span = tracing::debug_span!("unit", name = %unit.name).entered();

        let Some(content) = eligible_content(unit) else {
            tracing::debug!(unit = %unit.name, "ineligible");
            return Ok(UnitResult {
                name: unit.name.clone(),
                fixture_name: None,
                outcome: UnitOutcome::Ineligible,
            });
        };

        let request = EvaluationRequest {
            file_name: &unit.name,
            content,
            options: OracleOptions::for_unit(&unit.name),
            settings,
        };
        let records = match self.oracle.evaluate(&request) {
            Ok(records) => records,
            Err(e) if e.is_missing_ambient() && self.options.ambient == AmbientPolicy::Skip => {
                tracing::warn!(document = %document.id, unit = %unit.name, "skipped: {e}");
                return Ok(UnitResult {
                    name: unit.name.clone(),
                    fixture_name: None,
                    outcome: UnitOutcome::Skipped(e.to_string()),
                });
            }
            Err(source) => {
                return Err(RunError::Oracle {
                    document: document.id.clone(),
                    unit: unit.name.clone(),
                    source,
                })
            }
        };

        let verdict = classify(&records, &self.suppressed);
        let kind = verdict.kind();
        let name = fixture_name(&document.id, &unit.name);
        self.sink.store(document.category, kind, &name, content)?;
        tracing::debug!(unit = %unit.name, fixture = %name, verdict = %kind, "classified");

        let outcome = match verdict {
            Verdict::Positive => UnitOutcome::Positive,
            Verdict::Negative(contributing) => UnitOutcome::Negative(contributing),
        };
        Ok(UnitResult {
            name: unit.name.clone(),
            fixture_name: Some(name),
            outcome,
        })
    }
}
