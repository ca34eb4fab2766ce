//! Test document decomposition for tsfix.
//!
//! A conformance test document is a single text blob that may encode several
//! virtual source files via `// @filename:` markers, plus compiler option
//! directives (`// @target: es5`). This crate turns documents into
//! [`TestUnit`]s and decides which units are worth classifying.
//!
//! # Pipeline
//!
//! ```text
//! TestDocument
//!     │
//!     ▼
//! split_document() ──► SplitDocument { units, settings }
//!     │
//!     ▼
//! is_eligible() ──► units to hand to the oracle
//!     │
//!     ▼
//! fixture_name() ──► flattened, collision-free file name
//! ```

mod document;
pub mod filter;
pub mod naming;
pub mod split;

pub use document::{TestCategory, TestDocument, TestUnit};
pub use filter::{eligible_content, is_eligible, JsxSyntax, SourceKind};
pub use naming::{fixture_name, parse_fixture_name};
pub use split::{split_document, CompilerSettings, SplitDocument, Symlink};
