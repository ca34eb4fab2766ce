//! Diagnostic oracle boundary.
//!
//! The oracle is the full-fidelity type checker. tsfix never looks inside it:
//! a unit's file name, text and options go in, a flat list of
//! [`DiagnosticRecord`]s comes out.

mod process;
mod wire;

use std::io;

use serde::Serialize;
use tsfix_diagnostic::DiagnosticRecord;
use tsfix_units::{CompilerSettings, JsxSyntax, SourceKind};

pub use process::CommandOracle;

/// Template syntax handling requested from the oracle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JsxMode {
    None,
    Preserve,
}

/// Language surface requested from the oracle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageLevel {
    /// Newest syntax the oracle knows; the target parser has no lower mode.
    Latest,
}

/// Options for a single oracle evaluation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct OracleOptions {
    pub jsx: JsxMode,
    pub language: LanguageLevel,
}

impl OracleOptions {
    /// Options for a unit, keyed off its file extension.
    pub fn for_unit(name: &str) -> Self {
        let jsx = match SourceKind::from_name(name).map(SourceKind::jsx) {
            Some(JsxSyntax::Enabled) => JsxMode::Preserve,
            Some(JsxSyntax::Disabled) | None => JsxMode::None,
        };
        OracleOptions {
            jsx,
            language: LanguageLevel::Latest,
        }
    }
}

/// Everything the oracle needs to evaluate one unit.
#[derive(Clone, Copy, Debug)]
pub struct EvaluationRequest<'a> {
    pub file_name: &'a str,
    pub content: &'a str,
    pub options: OracleOptions,
    /// Document directives, forwarded untouched.
    pub settings: &'a CompilerSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// The unit needs ambient declarations the oracle could not load.
    #[error("missing ambient declarations: {0}")]
    MissingAmbientDeclarations(String),
    #[error("oracle evaluation failed: {0}")]
    Evaluation(String),
    #[error("failed to spawn oracle `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("oracle I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("malformed oracle response: {0}")]
    Protocol(String),
    #[error("oracle process exited unexpectedly")]
    Exited,
}

impl OracleError {
    pub fn is_missing_ambient(&self) -> bool {
        matches!(self, OracleError::MissingAmbientDeclarations(_))
    }
}

/// A full-fidelity type checker.
///
/// Implementations must tolerate concurrent `evaluate` calls from the
/// runner's worker threads.
pub trait Oracle: Send + Sync {
    /// Version string, reported for provenance only.
    fn version(&self) -> Result<String, OracleError>;

    /// Type check one unit and return every diagnostic it produces.
    fn evaluate(&self, request: &EvaluationRequest<'_>)
        -> Result<Vec<DiagnosticRecord>, OracleError>;
}
