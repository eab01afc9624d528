//! Containment checkers: `Contains` and `IsIn`.

use verdict_types::{CheckResult, CheckerInfo, Value};

use crate::checker::{require_args, Checker};

/// Whether `value` occurs inside `container`.
///
/// Sequences match by deep equality and only when their element type is
/// exactly the type of `value`; a type mismatch is a plain failure. Strings
/// match by substring and require `value` to be a string.
fn contains(container: &Value, value: &Value) -> CheckResult {
    match container {
        Value::Seq(seq) => {
            if *seq.elem_type() != value.type_desc() {
                return CheckResult::mismatch();
            }
            CheckResult::verdict(seq.iter().any(|item| item == value))
        }
        Value::Str(haystack) => match value.as_str() {
            Some(needle) => CheckResult::verdict(haystack.contains(needle)),
            None => CheckResult::usage(format!("value should have type: {}", value.type_desc())),
        },
        _ => CheckResult::usage(format!(
            "Unsupported argument types: {} {}",
            container.kind(),
            value.type_desc()
        )),
    }
}

// ── Contains ────────────────────────────────────────────────────────────

/// Checks that a sequence or string contains a value.
#[derive(Clone, Debug)]
pub struct Contains {
    info: CheckerInfo,
}

impl Contains {
    pub fn new() -> Self {
        Self {
            info: CheckerInfo::new("Contains", &["Container", "Value expected to contain"]),
        }
    }
}

impl Default for Contains {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for Contains {
    fn info(&self) -> &CheckerInfo {
        &self.info
    }

    fn check(&self, params: &[Value], _names: &[String]) -> CheckResult {
        if let Err(usage) = require_args(&self.info, params) {
            return usage;
        }
        contains(&params[0], &params[1])
    }
}

// ── IsIn ────────────────────────────────────────────────────────────────

/// `Contains` with the arguments swapped: element first, container second.
#[derive(Clone, Debug)]
pub struct IsIn {
    info: CheckerInfo,
}

impl IsIn {
    pub fn new() -> Self {
        Self {
            info: CheckerInfo::new("IsIn", &["Element", "Container"]),
        }
    }
}

impl Default for IsIn {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for IsIn {
    fn info(&self) -> &CheckerInfo {
        &self.info
    }

    fn check(&self, params: &[Value], _names: &[String]) -> CheckResult {
        if let Err(usage) = require_args(&self.info, params) {
            return usage;
        }
        contains(&params[1], &params[0])
    }
}
