//! Corpus discovery.
//!
//! Finds every test document of a category. The TypeScript repository keeps
//! them under `tests/cases/<category>/`, in arbitrarily nested directories and
//! with a mix of extensions; all regular files count.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tsfix_units::TestCategory;

/// A discovered test document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentPath {
    /// Path relative to the category root, `/`-separated.
    pub id: String,
    /// Path on disk.
    pub path: PathBuf,
}

/// Root directory of a category inside the TypeScript repository.
pub fn category_root(corpus_root: &Path, category: TestCategory) -> PathBuf {
    corpus_root
        .join("tests")
        .join("cases")
        .join(category.as_str())
}

/// Discover all documents below `root`, sorted by id.
///
/// Hidden files and directories are skipped.
pub fn discover_documents(root: &Path) -> io::Result<Vec<DocumentPath>> {
    let mut documents = Vec::new();
    discover_recursive(root, root, &mut documents)?;
    documents.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(documents)
}

fn discover_recursive(root: &Path, dir: &Path, documents: &mut Vec<DocumentPath>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        if entry.file_type()?.is_dir() {
            discover_recursive(root, &path, documents)?;
        } else if path.is_file() {
            documents.push(DocumentPath {
                id: document_id(root, &path),
                path,
            });
        }
    }
    Ok(())
}

fn document_id(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
