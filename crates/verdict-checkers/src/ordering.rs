//! Ordering checker: `IsSorted`.

use verdict_types::{CheckResult, CheckerInfo, Value};

use crate::checker::{require_args, Checker};

/// Checks that an ordered container is in non-decreasing order.
///
/// The container's own `less` decides the order; the check fails at the
/// first index whose element sorts strictly before its predecessor.
#[derive(Clone, Debug)]
pub struct IsSorted {
    info: CheckerInfo,
}

impl IsSorted {
    pub fn new() -> Self {
        Self {
            info: CheckerInfo::new("IsSorted", &["container"]),
        }
    }
}

impl Default for IsSorted {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for IsSorted {
    fn info(&self) -> &CheckerInfo {
        &self.info
    }

    fn check(&self, params: &[Value], _names: &[String]) -> CheckResult {
        if let Err(usage) = require_args(&self.info, params) {
            return usage;
        }
        let Some(container) = params[0].as_ordered() else {
            return CheckResult::usage("value object must implement `OrderedContainer`");
        };
        for i in 1..container.len() {
            if container.less(i, i - 1) {
                return CheckResult::fail(format!("value is not ordered at index {}", i));
            }
        }
        CheckResult::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_types::{SortBy, SortedSlice};

    fn run(v: Value) -> CheckResult {
        IsSorted::new().check(&[v], &[])
    }

    #[test]
    fn non_decreasing_passes() {
        assert!(run(Value::ordered(SortedSlice::new(vec![1, 2, 2, 5]))).passed);
    }

    #[test]
    fn reports_first_violation() {
        let result = run(Value::ordered(SortedSlice::new(vec![1, 3, 2])));
        assert!(!result.passed);
        assert_eq!(result.diagnostic, "value is not ordered at index 2");

        let result = run(Value::ordered(SortedSlice::new(vec![5, 1, 0])));
        assert_eq!(result.diagnostic, "value is not ordered at index 1");
    }

    #[test]
    fn trivial_containers_pass() {
        assert!(run(Value::ordered(SortedSlice::new(Vec::<i32>::new()))).passed);
        assert!(run(Value::ordered(SortedSlice::new(vec!["only"]))).passed);
    }

    #[test]
    fn uses_container_order() {
        let desc = SortBy::new(vec![9, 4, 4, 1], |a: &i32, b: &i32| a > b);
        assert!(run(Value::ordered(desc)).passed);
        let by_len = SortBy::new(vec!["bb", "a"], |a: &&str, b: &&str| a.len() < b.len());
        assert_eq!(run(Value::ordered(by_len)).diagnostic, "value is not ordered at index 1");
    }

    #[test]
    fn plain_sequences_lack_the_capability() {
        let result = run(Value::seq_of(vec![1i64, 2]));
        assert!(result.has_diagnostic());
        assert!(result.diagnostic.contains("OrderedContainer"));
    }

    #[test]
    fn floats_with_nan_are_not_violations() {
        // NaN is neither less nor greater than anything.
        assert!(run(Value::ordered(SortedSlice::new(vec![1.0, f64::NAN, 0.5]))).passed);
    }
}
