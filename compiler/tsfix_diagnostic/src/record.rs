use std::fmt;

/// Numeric diagnostic code as reported by the oracle (e.g. `2304`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct DiagnosticCode(pub u32);

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity category of a diagnostic.
///
/// Only [`Severity::Error`] takes part in classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Suggestion,
    Message,
}

impl Severity {
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Suggestion => write!(f, "suggestion"),
            Severity::Message => write!(f, "message"),
        }
    }
}

/// One oracle finding. The message is always the outermost text of the
/// oracle's message chain.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DiagnosticRecord {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
}

impl DiagnosticRecord {
    pub fn new(code: u32, severity: Severity, message: impl Into<String>) -> Self {
        DiagnosticRecord {
            code: DiagnosticCode(code),
            severity,
            message: message.into(),
        }
    }

    /// Shorthand for an error-severity record.
    pub fn error(code: u32, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Error, message)
    }
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} TS{}: {}", self.severity, self.code, self.message)
    }
}
