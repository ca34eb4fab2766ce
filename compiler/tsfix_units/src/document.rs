use std::fmt;

/// Test suite a document belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum TestCategory {
    Compiler,
    Conformance,
}

impl TestCategory {
    /// All categories, in the order a run visits them.
    pub const ALL: [TestCategory; 2] = [TestCategory::Compiler, TestCategory::Conformance];

    /// Directory name under `tests/cases/` and under the fixture root.
    pub fn as_str(self) -> &'static str {
        match self {
            TestCategory::Compiler => "compiler",
            TestCategory::Conformance => "conformance",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        TestCategory::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for TestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One corpus file, read once and consumed by the splitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestDocument {
    /// Corpus-relative path, always `/`-separated.
    pub id: String,
    pub category: TestCategory,
    pub text: String,
}

impl TestDocument {
    pub fn new(category: TestCategory, id: impl Into<String>, text: impl Into<String>) -> Self {
        TestDocument {
            id: id.into(),
            category,
            text: text.into(),
        }
    }
}

/// One virtual source file extracted from a [`TestDocument`].
///
/// `content` is `None` when the document's directives leave the unit's text
/// ambiguous (malformed marker, duplicated file name, non-trivia preamble).
/// Such units are never classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestUnit {
    /// Virtual file name; may contain `/`. Never empty.
    pub name: String,
    pub content: Option<String>,
    /// Position within the parent document.
    pub ordinal: usize,
    pub parent_document_id: String,
    pub parent_category: TestCategory,
}
