//! Codes the target parser is not expected to report.
//!
//! The parser under evaluation does no type inference, no module resolution
//! against a real filesystem and no cross-file declaration merging. Any
//! diagnostic that depends on those is suppressed so it never turns a unit
//! negative.

use rustc_hash::FxHashSet;

use crate::record::DiagnosticCode;

/// Curated list of unsupported codes.
const UNSUPPORTED_CODES: &[u32] = &[
    // Type relations and inference
    2315, // type is not generic
    2322, // type is not assignable
    2339, // property does not exist on type
    2349, // expression is not callable
    2355, // function must return a value
    2365, // operator cannot be applied to types
    2367, // comparison with no overlap
    2403, // subsequent variable declarations must have the same type
    2416, // property not assignable to base type property
    2430, // interface incorrectly extends interface
    2449, // class used before its declaration
    2506, // circular base expression
    2540, // assignment to read-only property
    2551, // property does not exist, did you mean
    2552, // cannot find name, did you mean
    2554, // argument count mismatch
    2559, // no properties in common
    2589, // type instantiation excessively deep
    2693, // type used as a value
    2739, // missing properties
    2741, // missing required property
    2872, // expression is always truthy
    18033, // computed enum member type
    // Module resolution and ambient environment
    2580, // cannot find name, install type definitions
    2664, // invalid module name in augmentation
    2688, // cannot find type definition file
    2792, // cannot find module
    6053, // file not found
    // Cross-file declarations and global scope
    2661, // cannot export a non-local declaration
    2669, // global augmentation outside a module
    2694, // namespace has no exported member
    // Checker-only comment directives
    2578, // unused '@ts-expect-error'
    8020, // JSDoc types outside documentation comments
];

/// Read-only set of suppressed diagnostic codes.
#[derive(Clone, Debug)]
pub struct SuppressionSet {
    codes: FxHashSet<DiagnosticCode>,
}

impl SuppressionSet {
    /// The curated production set.
    pub fn curated() -> Self {
        Self::from_codes(UNSUPPORTED_CODES.iter().copied())
    }

    /// Build a set from explicit codes.
    pub fn from_codes(codes: impl IntoIterator<Item = u32>) -> Self {
        SuppressionSet {
            codes: codes.into_iter().map(DiagnosticCode).collect(),
        }
    }

    /// A set that suppresses nothing.
    pub fn empty() -> Self {
        SuppressionSet {
            codes: FxHashSet::default(),
        }
    }

    pub fn contains(&self, code: DiagnosticCode) -> bool {
        self.codes.contains(&code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for SuppressionSet {
    fn default() -> Self {
        Self::curated()
    }
}
