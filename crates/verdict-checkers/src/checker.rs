//! The checker capability shared by every predicate.

use verdict_types::{CheckResult, CheckerInfo, Value};

/// A named predicate over runtime-typed arguments.
///
/// The harness calls [`check`](Checker::check) with the arguments in the
/// order of [`CheckerInfo::params`] and the labels it uses for them.
/// Implementations never mutate their inputs and never panic; misuse is
/// reported through a usage diagnostic on the returned result.
pub trait Checker: Send + Sync {
    /// Descriptor used by the harness for messages and documentation.
    fn info(&self) -> &CheckerInfo;

    /// Evaluate the predicate.
    fn check(&self, params: &[Value], names: &[String]) -> CheckResult;

    /// Name of this checker.
    fn name(&self) -> &str {
        &self.info().name
    }
}

/// Ensures at least `info.arity()` arguments were supplied.
pub(crate) fn require_args(info: &CheckerInfo, params: &[Value]) -> Result<(), CheckResult> {
    if params.len() < info.arity() {
        return Err(CheckResult::usage(format!(
            "{} expects {} arguments, got {}",
            info.name,
            info.arity(),
            params.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_argument_lists_are_usage_errors() {
        let info = CheckerInfo::new("Pair", &["a", "b"]);
        let err = require_args(&info, &[Value::Int(1)]).unwrap_err();
        assert_eq!(err.diagnostic, "Pair expects 2 arguments, got 1");
        assert!(require_args(&info, &[Value::Int(1), Value::Int(2)]).is_ok());
        assert!(require_args(&info, &[Value::Int(1), Value::Int(2), Value::Unit]).is_ok());
    }
}
