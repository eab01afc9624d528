//! Order-sensitive collection equality: `SliceEquals` and `MapEquals`.

use verdict_types::{CheckResult, CheckerInfo, Value};

use crate::checker::{require_args, Checker};

// ── SliceEquals ─────────────────────────────────────────────────────────

/// Checks that two sequences are deeply equal, element by element.
#[derive(Clone, Debug)]
pub struct SliceEquals {
    info: CheckerInfo,
}

impl SliceEquals {
    pub fn new() -> Self {
        Self {
            info: CheckerInfo::new("SliceEquals", &["obtained", "expected"]),
        }
    }
}

impl Default for SliceEquals {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for SliceEquals {
    fn info(&self) -> &CheckerInfo {
        &self.info
    }

    fn check(&self, params: &[Value], _names: &[String]) -> CheckResult {
        if let Err(usage) = require_args(&self.info, params) {
            return usage;
        }
        let (Some(obtained), Some(expected)) = (params[0].as_seq(), params[1].as_seq()) else {
            return CheckResult::usage("Both arguments must be slices");
        };
        if obtained.len() != expected.len() {
            return CheckResult::mismatch();
        }
        CheckResult::verdict(obtained == expected)
    }
}

// ── MapEquals ───────────────────────────────────────────────────────────

/// Checks that two maps hold the same keys with deeply equal values.
#[derive(Clone, Debug)]
pub struct MapEquals {
    info: CheckerInfo,
}

impl MapEquals {
    pub fn new() -> Self {
        Self {
            info: CheckerInfo::new("MapEquals", &["obtained", "expected"]),
        }
    }
}

impl Default for MapEquals {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for MapEquals {
    fn info(&self) -> &CheckerInfo {
        &self.info
    }

    fn check(&self, params: &[Value], _names: &[String]) -> CheckResult {
        if let Err(usage) = require_args(&self.info, params) {
            return usage;
        }
        let (Some(obtained), Some(expected)) = (params[0].as_map(), params[1].as_map()) else {
            return CheckResult::usage("Both arguments must be maps");
        };
        if obtained.len() != expected.len() {
            return CheckResult::mismatch();
        }
        CheckResult::verdict(obtained == expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_types::{Mapping, TypeDesc};

    fn run(checker: &dyn Checker, a: Value, b: Value) -> CheckResult {
        checker.check(&[a, b], &[])
    }

    #[test]
    fn slices_equal_in_order() {
        let a = Value::seq_of(vec![1i64, 2]);
        assert!(run(&SliceEquals::new(), a.clone(), Value::seq_of(vec![1i64, 2])).passed);
        assert_eq!(
            run(&SliceEquals::new(), a, Value::seq_of(vec![2i64, 1])),
            CheckResult::mismatch()
        );
    }

    #[test]
    fn slices_of_different_length() {
        let result = run(
            &SliceEquals::new(),
            Value::seq_of(vec![1i64]),
            Value::seq_of(vec![1i64, 1]),
        );
        assert_eq!(result, CheckResult::mismatch());
    }

    #[test]
    fn slices_of_different_element_type() {
        let typed = Value::seq_of(vec![1i64]);
        let untyped = Value::seq(TypeDesc::Any, vec![Value::Int(1)]).unwrap();
        assert_eq!(run(&SliceEquals::new(), typed, untyped), CheckResult::mismatch());
    }

    #[test]
    fn slice_equals_rejects_non_slices() {
        let result = run(&SliceEquals::new(), Value::seq_of(vec![1i64]), "x".into());
        assert_eq!(result.diagnostic, "Both arguments must be slices");
    }

    #[test]
    fn maps_equal() {
        let a = Value::map_of(vec![("a", 1i64)]).unwrap();
        let b = Value::map_of(vec![("a", 1i64)]).unwrap();
        assert!(run(&MapEquals::new(), a, b).passed);
    }

    #[test]
    fn maps_differ_in_value_or_size() {
        let a = Value::map_of(vec![("a", 1i64)]).unwrap();
        let b = Value::map_of(vec![("a", 2i64)]).unwrap();
        let c = Value::map_of(vec![("a", 1i64), ("b", 1)]).unwrap();
        assert_eq!(run(&MapEquals::new(), a.clone(), b), CheckResult::mismatch());
        assert_eq!(run(&MapEquals::new(), a, c), CheckResult::mismatch());
    }

    #[test]
    fn maps_with_nan_keys_never_match() {
        let mut m = Mapping::new(TypeDesc::Float, TypeDesc::Int).unwrap();
        m.insert(Value::Float(f64::NAN), Value::Int(1)).unwrap();
        m.insert(Value::Float(f64::NAN), Value::Int(1)).unwrap();
        assert_eq!(m.len(), 2);
        let map = Value::Map(m);
        assert_eq!(run(&MapEquals::new(), map.clone(), map), CheckResult::mismatch());
    }

    #[test]
    fn map_equals_rejects_non_maps() {
        let result = run(&MapEquals::new(), Value::seq_of(vec![1i64]), Value::seq_of(vec![1i64]));
        assert_eq!(result.diagnostic, "Both arguments must be maps");
    }
}
