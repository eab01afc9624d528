//! Checker descriptors and check results.

use serde::{Deserialize, Serialize};

// ── Descriptor ──────────────────────────────────────────────────────────

/// Identity of a checker: its name and the labels of its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerInfo {
    /// Checker name, e.g. `Contains`.
    pub name: String,
    /// Ordered parameter labels, e.g. `["Container", "Value expected to contain"]`.
    pub params: Vec<String>,
}

impl CheckerInfo {
    pub fn new(name: impl Into<String>, params: &[&str]) -> Self {
        Self {
            name: name.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Number of arguments the checker expects.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// ── Result ──────────────────────────────────────────────────────────────

/// Outcome of a single check.
///
/// A failed check with an empty diagnostic is a plain comparison mismatch;
/// the harness formats its own "obtained / expected" message. A non-empty
/// diagnostic on failure explains a usage or type error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the check passed.
    pub passed: bool,
    /// Explanation of a failure, empty for plain mismatches.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub diagnostic: String,
}

impl CheckResult {
    /// Create a passing result.
    pub fn pass() -> Self {
        Self {
            passed: true,
            diagnostic: String::new(),
        }
    }

    /// Create a failing result without a diagnostic.
    pub fn mismatch() -> Self {
        Self {
            passed: false,
            diagnostic: String::new(),
        }
    }

    /// Create a failing result explaining a usage or type error.
    pub fn usage(diagnostic: impl Into<String>) -> Self {
        Self {
            passed: false,
            diagnostic: diagnostic.into(),
        }
    }

    /// Create a failing result explaining why the comparison failed.
    pub fn fail(diagnostic: impl Into<String>) -> Self {
        Self::usage(diagnostic)
    }

    /// Pass or plain mismatch depending on `passed`.
    pub fn verdict(passed: bool) -> Self {
        if passed {
            Self::pass()
        } else {
            Self::mismatch()
        }
    }

    /// Whether this is a failure carrying a diagnostic.
    pub fn has_diagnostic(&self) -> bool {
        !self.passed && !self.diagnostic.is_empty()
    }
}
