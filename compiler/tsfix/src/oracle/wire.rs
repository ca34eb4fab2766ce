//! Line-delimited JSON protocol spoken with an oracle process.
//!
//! ```text
//! > {"type":"version"}
//! < {"type":"version","version":"5.8.3"}
//! > {"type":"evaluate","file_name":"a.ts","content":"...","options":{...},"settings":{...},"links":[...]}
//! < {"type":"diagnostics","diagnostics":[{"code":1005,"category":"error","message":"';' expected."}]}
//! < {"type":"failure","kind":"missing_ambient_declarations","message":"..."}
//! ```
//!
//! `links` carries the document's `@link` declarations and is omitted when
//! there are none. A diagnostic `message` is either a plain string or a
//! message chain (`{"text": "...", "next": [...]}`); only the outermost text
//! is kept.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tsfix_diagnostic::{DiagnosticRecord, Severity};

use super::{EvaluationRequest, OracleError, OracleOptions};

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(super) enum Request<'a> {
    Version,
    Evaluate {
        file_name: &'a str,
        content: &'a str,
        options: OracleOptions,
        settings: &'a BTreeMap<String, String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        links: Vec<Link<'a>>,
    },
}

/// A `@link` declaration on the wire.
#[derive(Debug, Serialize)]
pub(super) struct Link<'a> {
    target: &'a str,
    link: &'a str,
}

impl<'a> Request<'a> {
    pub(super) fn evaluate(request: &EvaluationRequest<'a>) -> Self {
        Request::Evaluate {
            file_name: request.file_name,
            content: request.content,
            options: request.options,
            settings: request.settings.options(),
            links: request
                .settings
                .symlinks()
                .iter()
                .map(|s| Link {
                    target: &s.target,
                    link: &s.link,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(super) enum Response {
    Version { version: String },
    Diagnostics { diagnostics: Vec<WireDiagnostic> },
    Failure { kind: FailureKind, message: String },
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(super) enum FailureKind {
    MissingAmbientDeclarations,
    Internal,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireDiagnostic {
    code: u32,
    category: WireCategory,
    message: MessageText,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum WireCategory {
    Error,
    Warning,
    Suggestion,
    Message,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MessageText {
    Plain(String),
    Chain(MessageChain),
}

#[derive(Debug, Deserialize)]
struct MessageChain {
    #[serde(alias = "messageText")]
    text: String,
}

impl WireDiagnostic {
    fn into_record(self) -> DiagnosticRecord {
        let severity = match self.category {
            WireCategory::Error => Severity::Error,
            WireCategory::Warning => Severity::Warning,
            WireCategory::Suggestion => Severity::Suggestion,
            WireCategory::Message => Severity::Message,
        };
        let message = match self.message {
            MessageText::Plain(text) | MessageText::Chain(MessageChain { text }) => text,
        };
        DiagnosticRecord::new(self.code, severity, message)
    }
}

impl Response {
    pub(super) fn into_diagnostics(self) -> Result<Vec<DiagnosticRecord>, OracleError> {
        match self {
            Response::Diagnostics { diagnostics } => Ok(diagnostics
                .into_iter()
                .map(WireDiagnostic::into_record)
                .collect()),
            Response::Failure { kind, message } => Err(match kind {
                FailureKind::MissingAmbientDeclarations => {
                    OracleError::MissingAmbientDeclarations(message)
                }
                FailureKind::Internal => OracleError::Evaluation(message),
            }),
            Response::Version { .. } => Err(OracleError::Protocol(
                "expected diagnostics, got a version response".to_string(),
            )),
        }
    }

    pub(super) fn into_version(self) -> Result<String, OracleError> {
        match self {
            Response::Version { version } => Ok(version),
            Response::Failure { message, .. } => Err(OracleError::Evaluation(message)),
            Response::Diagnostics { .. } => Err(OracleError::Protocol(
                "expected a version, got a diagnostics response".to_string(),
            )),
        }
    }
}

pub(super) fn encode(request: &Request<'_>) -> Result<String, OracleError> {
    serde_json::to_string(request).map_err(|e| OracleError::Protocol(e.to_string()))
}

pub(super) fn decode(line: &str) -> Result<Response, OracleError> {
    let line = line.trim_end();
    serde_json::from_str(line).map_err(|e| OracleError::Protocol(format!("{e}: {line}")))
}
