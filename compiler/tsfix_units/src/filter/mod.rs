//! Unit eligibility.
//!
//! Only script-like units (TypeScript and JavaScript, including their JSX
//! variants) with real content are classified. Declaration files, data files
//! (`.json`, `.md`, `.map`, ...) and ambiguous units are skipped.

use crate::document::TestUnit;

/// Source flavour of a unit, derived from its file name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SourceKind {
    /// `.ts`, `.mts`, `.cts`
    TypeScript,
    /// `.tsx`
    TypeScriptJsx,
    /// `.js`, `.mjs`, `.cjs`
    JavaScript,
    /// `.jsx`
    JavaScriptJsx,
    /// `.d.ts`, `.d.mts`, `.d.cts`
    Declaration,
}

/// Whether the oracle must parse template (JSX) syntax.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum JsxSyntax {
    Disabled,
    Enabled,
}

const DECLARATION_SUFFIXES: [&str; 3] = [".d.ts", ".d.mts", ".d.cts"];

impl SourceKind {
    /// Classify a virtual file name. `None` for anything that is not source.
    pub fn from_name(name: &str) -> Option<Self> {
        if DECLARATION_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            return Some(SourceKind::Declaration);
        }
        let (_, extension) = name.rsplit_once('.')?;
        match extension {
            "ts" | "mts" | "cts" => Some(SourceKind::TypeScript),
            "tsx" => Some(SourceKind::TypeScriptJsx),
            "js" | "mjs" | "cjs" => Some(SourceKind::JavaScript),
            "jsx" => Some(SourceKind::JavaScriptJsx),
            _ => None,
        }
    }

    pub fn is_declaration(self) -> bool {
        matches!(self, SourceKind::Declaration)
    }

    pub fn jsx(self) -> JsxSyntax {
        match self {
            SourceKind::TypeScriptJsx | SourceKind::JavaScriptJsx => JsxSyntax::Enabled,
            SourceKind::TypeScript | SourceKind::JavaScript | SourceKind::Declaration => {
                JsxSyntax::Disabled
            }
        }
    }
}

/// The unit's content, if the unit should be classified.
pub fn eligible_content(unit: &TestUnit) -> Option<&str> {
    let content = unit.content.as_deref()?;
    if content.trim().is_empty() {
        return None;
    }
    match SourceKind::from_name(&unit.name) {
        Some(kind) if !kind.is_declaration() => Some(content),
        _ => None,
    }
}

pub fn is_eligible(unit: &TestUnit) -> bool {
    eligible_content(unit).is_some()
}

#[cfg(test)]
mod tests;
