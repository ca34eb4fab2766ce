//! Unit splitting: one test document in, an ordered list of units out.
//!
//! Recognized directives (the line must start with `//`):
//! - `// @filename: path` starts a new unit
//! - `// @link: target -> link` declares a symlink
//! - `// @anything: value` records a compiler option
//!
//! Without any `@filename` marker the whole document is a single unit named
//! after the document's base name. With markers, each unit owns the exact
//! text between its marker line and the next one.

mod directive;

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::document::{TestDocument, TestUnit};
use directive::{is_trivia, lines, parse_directive};

/// A `// @link: target -> link` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symlink {
    pub target: String,
    pub link: String,
}

impl Symlink {
    fn parse(value: &str) -> Option<Self> {
        let (target, link) = value.split_once("->")?;
        let (target, link) = (target.trim(), link.trim());
        if target.is_empty() || link.is_empty() {
            return None;
        }
        Some(Symlink {
            target: target.to_string(),
            link: link.to_string(),
        })
    }
}

/// Document-level compiler options, passed to the oracle untouched.
///
/// Option names keep the spelling used in the document. A later occurrence
/// of the same name overwrites the earlier value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompilerSettings {
    options: BTreeMap<String, String>,
    symlinks: Vec<Symlink>,
}

impl CompilerSettings {
    /// Look up an option by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    pub fn symlinks(&self) -> &[Symlink] {
        &self.symlinks
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.symlinks.is_empty()
    }
}

/// Result of splitting one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitDocument {
    pub units: Vec<TestUnit>,
    pub settings: CompilerSettings,
}

struct Marker<'a> {
    name: &'a str,
    line_start: usize,
    content_start: usize,
}

/// Split a document into its units and collect its compiler settings.
pub fn split_document(document: &TestDocument) -> SplitDocument {
    let text = document.text.as_str();
    let mut settings = CompilerSettings::default();
    let mut markers = Vec::new();

    for line in lines(text) {
        let Some((name, value)) = parse_directive(line.text) else {
            continue;
        };
        if name.eq_ignore_ascii_case("filename") {
            markers.push(Marker {
                name: value,
                line_start: line.start,
                content_start: line.end,
            });
            continue;
        }
        if name == "link" {
            if let Some(symlink) = Symlink::parse(value) {
                settings.symlinks.push(symlink);
                continue;
            }
        }
        settings
            .options
            .retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        settings.options.insert(name.to_string(), value.to_string());
    }

    let units = if markers.is_empty() {
        vec![single_unit(document)]
    } else {
        units_from_markers(document, &markers)
    };

    SplitDocument { units, settings }
}

fn single_unit(document: &TestDocument) -> TestUnit {
    let base = document.id.rsplit('/').next().unwrap_or_default();
    let name = if base.is_empty() {
        unnamed(0)
    } else {
        base.to_string()
    };
    TestUnit {
        name,
        content: Some(document.text.clone()),
        ordinal: 0,
        parent_document_id: document.id.clone(),
        parent_category: document.category,
    }
}

fn units_from_markers(document: &TestDocument, markers: &[Marker<'_>]) -> Vec<TestUnit> {
    let text = document.text.as_str();

    let mut occurrences: FxHashMap<&str, usize> = FxHashMap::default();
    for marker in markers {
        *occurrences.entry(marker.name).or_default() += 1;
    }

    // Code ahead of the first marker cannot be attributed to any unit.
    let preamble_is_trivia = is_trivia(&text[..markers[0].line_start]);

    markers
        .iter()
        .enumerate()
        .map(|(ordinal, marker)| {
            let end = markers
                .get(ordinal + 1)
                .map_or(text.len(), |next| next.line_start);
            let malformed = marker.name.is_empty();
            let ambiguous = malformed
                || occurrences.get(marker.name).copied().unwrap_or(0) > 1
                || (ordinal == 0 && !preamble_is_trivia);

            TestUnit {
                name: if malformed {
                    unnamed(ordinal)
                } else {
                    marker.name.to_string()
                },
                content: (!ambiguous).then(|| text[marker.content_start..end].to_string()),
                ordinal,
                parent_document_id: document.id.clone(),
                parent_category: document.category,
            }
        })
        .collect()
}

fn unnamed(ordinal: usize) -> String {
    format!("unnamed-{ordinal}")
}

#[cfg(test)]
mod tests;
