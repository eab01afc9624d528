//! Time and duration checkers: `TimeBetween` and `DurationLessThan`.

use chrono::{DateTime, Utc};
use tracing::debug;
use verdict_types::{CheckResult, CheckerInfo, Value};

use crate::checker::{require_args, Checker};

// ── TimeBetween ─────────────────────────────────────────────────────────

/// Checks that a time lies within an inclusive interval.
///
/// The interval is fixed at construction. Bounds given in reverse order are
/// swapped so that `start` is always the earlier instant.
#[derive(Clone, Debug)]
pub struct TimeBetween {
    info: CheckerInfo,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeBetween {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let (start, end) = if end < start {
            debug!(%start, %end, "TimeBetween bounds given in reverse order, swapping");
            (end, start)
        } else {
            (start, end)
        };
        Self {
            info: CheckerInfo::new("TimeBetween", &["obtained"]),
            start,
            end,
        }
    }

    /// Lower (earlier) bound.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Upper (later) bound.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

impl Checker for TimeBetween {
    fn info(&self) -> &CheckerInfo {
        &self.info
    }

    fn check(&self, params: &[Value], _names: &[String]) -> CheckResult {
        if let Err(usage) = require_args(&self.info, params) {
            return usage;
        }
        let Some(when) = params[0].as_time() else {
            return CheckResult::usage("obtained value type must be a time");
        };
        if when < self.start {
            return CheckResult::fail(format!(
                "obtained value {} must not be before start value of {}",
                Value::Time(when),
                Value::Time(self.start)
            ));
        }
        if when > self.end {
            return CheckResult::fail(format!(
                "obtained value {} must not be after end value of {}",
                Value::Time(when),
                Value::Time(self.end)
            ));
        }
        CheckResult::pass()
    }
}

// ── DurationLessThan ────────────────────────────────────────────────────

/// Checks that the obtained duration is strictly shorter than the expected one.
#[derive(Clone, Debug)]
pub struct DurationLessThan {
    info: CheckerInfo,
}

impl DurationLessThan {
    pub fn new() -> Self {
        Self {
            info: CheckerInfo::new("DurationLessThan", &["obtained", "expected"]),
        }
    }
}

impl Default for DurationLessThan {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for DurationLessThan {
    fn info(&self) -> &CheckerInfo {
        &self.info
    }

    fn check(&self, params: &[Value], _names: &[String]) -> CheckResult {
        if let Err(usage) = require_args(&self.info, params) {
            return usage;
        }
        let Some(obtained) = params[0].as_duration() else {
            return CheckResult::usage("obtained value type must be a duration");
        };
        let Some(expected) = params[1].as_duration() else {
            return CheckResult::usage("expected value type must be a duration");
        };
        CheckResult::verdict(obtained < expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
    }

    fn check_time(checker: &TimeBetween, t: DateTime<Utc>) -> CheckResult {
        checker.check(&[Value::Time(t)], &[])
    }

    #[test]
    fn inside_and_on_bounds() {
        let checker = TimeBetween::new(at(10), at(12));
        assert!(check_time(&checker, at(11)).passed);
        assert!(check_time(&checker, at(10)).passed);
        assert!(check_time(&checker, at(12)).passed);
    }

    #[test]
    fn outside_bounds() {
        let checker = TimeBetween::new(at(10), at(12));
        let before = check_time(&checker, at(9));
        assert!(!before.passed);
        assert!(before.diagnostic.contains("before start"));
        assert!(before.diagnostic.contains("2024-06-01T09:00:00Z"));
        assert!(before.diagnostic.contains("2024-06-01T10:00:00Z"));

        let after = check_time(&checker, at(13));
        assert!(!after.passed);
        assert!(after.diagnostic.contains("after end"));
        assert!(after.diagnostic.contains("2024-06-01T12:00:00Z"));
    }

    #[test]
    fn reversed_bounds_are_normalised() {
        let checker = TimeBetween::new(at(12), at(10));
        assert_eq!(checker.start(), at(10));
        assert_eq!(checker.end(), at(12));
        assert!(check_time(&checker, at(10)).passed);
        assert!(check_time(&checker, at(12)).passed);
        assert!(!check_time(&checker, at(13)).passed);
    }

    #[test]
    fn single_instant_interval() {
        let checker = TimeBetween::new(at(10), at(10));
        assert!(check_time(&checker, at(10)).passed);
        assert!(!check_time(&checker, at(11)).passed);
    }

    #[test]
    fn non_time_input() {
        let checker = TimeBetween::new(at(10), at(12));
        let result = checker.check(&[Value::Int(10)], &[]);
        assert_eq!(result.diagnostic, "obtained value type must be a time");
        assert_eq!(checker.info().params, vec!["obtained"]);
    }

    fn check_durations(a: Value, b: Value) -> CheckResult {
        DurationLessThan::new().check(&[a, b], &[])
    }

    #[test]
    fn strictly_less() {
        let ms = |n| Value::Duration(Duration::milliseconds(n));
        assert!(check_durations(ms(5), ms(10)).passed);
        assert_eq!(check_durations(ms(10), ms(5)), CheckResult::mismatch());
        assert_eq!(check_durations(ms(10), ms(10)), CheckResult::mismatch());
    }

    #[test]
    fn nanosecond_resolution() {
        let a = Value::Duration(Duration::nanoseconds(1_000_000));
        let b = Value::Duration(Duration::nanoseconds(1_000_001));
        assert!(check_durations(a, b).passed);
    }

    #[test]
    fn duration_type_errors() {
        let ms = Value::Duration(Duration::milliseconds(1));
        let result = check_durations(Value::Int(5), ms.clone());
        assert_eq!(result.diagnostic, "obtained value type must be a duration");
        let result = check_durations(ms, Value::Float(1.0));
        assert_eq!(result.diagnostic, "expected value type must be a duration");
    }
}
