//! Order-independent multiset equality: `SameContent`.

use std::collections::BTreeMap;

use verdict_types::{CheckResult, CheckerInfo, Key, Sequence, TypeDesc, Value};

use crate::checker::Checker;

/// Checks that two sequences hold the same elements with the same
/// multiplicities, in any order.
///
/// Elements are counted by their [`Key`], so the element type must be
/// hashable. Sequences of sequences, maps or ordered containers are
/// reported as a usage error.
#[derive(Clone, Debug)]
pub struct SameContent {
    info: CheckerInfo,
}

impl SameContent {
    pub fn new() -> Self {
        Self {
            info: CheckerInfo::new("SameContent", &["obtained", "expected"]),
        }
    }
}

impl Default for SameContent {
    fn default() -> Self {
        Self::new()
    }
}

/// Occurrence count per element, or the offending element when one is not
/// hashable.
fn count(seq: &Sequence) -> Result<BTreeMap<Key, usize>, &Value> {
    let mut counts = BTreeMap::new();
    for item in seq.iter() {
        let key = item.to_key().ok_or(item)?;
        *counts.entry(key).or_insert(0) += 1;
    }
    Ok(counts)
}

impl Checker for SameContent {
    fn info(&self) -> &CheckerInfo {
        &self.info
    }

    fn check(&self, params: &[Value], _names: &[String]) -> CheckResult {
        if params.len() != 2 {
            return CheckResult::usage("SameContent expects two slice arguments");
        }
        let (obtained, expected) = (&params[0], &params[1]);

        let Some(obtained) = obtained.as_seq() else {
            return CheckResult::usage(format!(
                "SameContent expects the obtained value to be a slice, got {:?}",
                obtained.kind().as_str()
            ));
        };
        let Some(expected) = expected.as_seq() else {
            return CheckResult::usage(format!(
                "SameContent expects the expected value to be a slice, got {:?}",
                expected.kind().as_str()
            ));
        };

        if obtained.elem_type() != expected.elem_type() {
            return CheckResult::usage(format!(
                "SameContent expects two slices of the same type, expected: {:?}, got: {:?}",
                TypeDesc::seq(expected.elem_type().clone()).to_string(),
                TypeDesc::seq(obtained.elem_type().clone()).to_string(),
            ));
        }

        if obtained.len() != expected.len() {
            return CheckResult::mismatch();
        }

        let counted = count(obtained).and_then(|ob| count(expected).map(|exp| (ob, exp)));
        let (obtained_counts, expected_counts) = match counted {
            Ok(counts) => counts,
            Err(item) => {
                return CheckResult::usage(format!(
                    "SameContent cannot count elements of type {:?}: values are not hashable",
                    item.type_desc().to_string()
                ));
            }
        };

        // NaN never equals itself, so no NaN-keyed entry can be matched.
        if obtained_counts.keys().any(Key::has_nan) {
            return CheckResult::mismatch();
        }
        CheckResult::verdict(obtained_counts == expected_counts)
    }
}
