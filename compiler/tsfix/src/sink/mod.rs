//! Fixture persistence.
//!
//! Output layout:
//!
//! ```text
//! <out>/
//! ├── error-codes-to-be-supported.txt
//! ├── compiler/
//! │   ├── positive/<fixture name>
//! │   └── negative/<fixture name>
//! └── conformance/
//!     ├── positive/
//!     └── negative/
//! ```
//!
//! A run only resets what it owns: the table and the verdict directories of
//! the categories it processes. Anything else under `<out>` is left alone.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tsfix_diagnostic::{DiagnosticCode, VerdictKind};
use tsfix_units::TestCategory;

/// Name of the aggregate table file at the output root.
pub const TABLE_FILE_NAME: &str = "error-codes-to-be-supported.txt";

#[derive(Debug, thiserror::Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct SinkError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Destination for classified units and the aggregate table.
pub trait FixtureSink: Send + Sync {
    /// Reset the output for a new run.
    fn prepare(&self, categories: &[TestCategory]) -> Result<(), SinkError>;

    fn store(
        &self,
        category: TestCategory,
        verdict: VerdictKind,
        fixture_name: &str,
        content: &str,
    ) -> Result<(), SinkError>;

    fn store_table(&self, entries: &[(DiagnosticCode, String)]) -> Result<(), SinkError>;
}

/// Render the aggregate table: one code per line, ascending.
pub fn render_table(entries: &[(DiagnosticCode, String)]) -> String {
    entries
        .iter()
        .map(|(code, _)| code.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes fixtures below a root directory.
#[derive(Clone, Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsSink { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn verdict_dir(&self, category: TestCategory, verdict: VerdictKind) -> PathBuf {
        self.root.join(category.as_str()).join(verdict.as_str())
    }

    pub fn fixture_path(
        &self,
        category: TestCategory,
        verdict: VerdictKind,
        fixture_name: &str,
    ) -> PathBuf {
        self.verdict_dir(category, verdict).join(fixture_name)
    }

    pub fn table_path(&self) -> PathBuf {
        self.root.join(TABLE_FILE_NAME)
    }
}

/// `Ok(true)` if something was removed, `Ok(false)` if it was already absent.
fn remove_if_present(result: io::Result<()>) -> io::Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

fn at(path: &Path) -> impl FnOnce(io::Error) -> SinkError + '_ {
    move |source| SinkError {
        path: path.to_path_buf(),
        source,
    }
}

impl FixtureSink for FsSink {
    fn prepare(&self, categories: &[TestCategory]) -> Result<(), SinkError> {
        fs::create_dir_all(&self.root).map_err(at(&self.root))?;
        let table = self.table_path();
        remove_if_present(fs::remove_file(&table)).map_err(at(&table))?;
        for &category in categories {
            for verdict in [VerdictKind::Positive, VerdictKind::Negative] {
                let dir = self.verdict_dir(category, verdict);
                if remove_if_present(fs::remove_dir_all(&dir)).map_err(at(&dir))? {
                    tracing::debug!(dir = %dir.display(), "removed previous fixtures");
                }
                fs::create_dir_all(&dir).map_err(at(&dir))?;
            }
        }
        Ok(())
    }

    fn store(
        &self,
        category: TestCategory,
        verdict: VerdictKind,
        fixture_name: &str,
        content: &str,
    ) -> Result<(), SinkError> {
        let path = self.fixture_path(category, verdict, fixture_name);
        fs::write(&path, content).map_err(at(&path))
    }

    fn store_table(&self, entries: &[(DiagnosticCode, String)]) -> Result<(), SinkError> {
        let path = self.table_path();
        fs::write(&path, render_table(entries)).map_err(at(&path))
    }
}

/// Sink for dry runs: nothing is persisted.
#[derive(Clone, Copy, Debug, Default)]
pub struct DryRunSink;

impl FixtureSink for DryRunSink {
    fn prepare(&self, _categories: &[TestCategory]) -> Result<(), SinkError> {
        Ok(())
    }

    fn store(
        &self,
        _category: TestCategory,
        _verdict: VerdictKind,
        _fixture_name: &str,
        _content: &str,
    ) -> Result<(), SinkError> {
        Ok(())
    }

    fn store_table(&self, _entries: &[(DiagnosticCode, String)]) -> Result<(), SinkError> {
        Ok(())
    }
}
