//! Debug command: `split` shows how a single document decomposes into units.

use std::fmt::Write as _;
use std::path::Path;

use tsfix_units::{
    fixture_name, is_eligible, split_document, SplitDocument, TestCategory, TestDocument,
};

use super::{EXIT_FAILURE, EXIT_OK};

/// Split one file and print its units and settings.
pub fn split_file(path: &str) -> i32 {
    let bytes = match std::fs::read(Path::new(path)) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: failed to read '{path}': {e}");
            return EXIT_FAILURE;
        }
    };
    let id = path.replace('\\', "/");
    let document = TestDocument::new(TestCategory::Compiler, id, String::from_utf8_lossy(&bytes));
    print!("{}", describe_split(&document.id, &split_document(&document)));
    EXIT_OK
}

/// Human-readable listing of a split document.
pub fn describe_split(id: &str, split: &SplitDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Units for '{id}' ({} units):", split.units.len());
    for unit in &split.units {
        match &unit.content {
            Some(content) if is_eligible(unit) => {
                let _ = writeln!(
                    out,
                    "  [{}] {} ({} bytes) -> {}",
                    unit.ordinal,
                    unit.name,
                    content.len(),
                    fixture_name(id, &unit.name)
                );
            }
            Some(content) => {
                let _ = writeln!(
                    out,
                    "  [{}] {} ({} bytes, ineligible)",
                    unit.ordinal,
                    unit.name,
                    content.len()
                );
            }
            None => {
                let _ = writeln!(out, "  [{}] {} (malformed)", unit.ordinal, unit.name);
            }
        }
    }

    if !split.settings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Settings:");
        for (name, value) in split.settings.options() {
            let _ = writeln!(out, "  {name} = {value}");
        }
        for symlink in split.settings.symlinks() {
            let _ = writeln!(out, "  link {} -> {}", symlink.target, symlink.link);
        }
    }
    out
}
