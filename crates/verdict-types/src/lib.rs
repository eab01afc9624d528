//! # verdict-types
//!
//! Runtime value model shared by the verdict checkers.
//!
//! Checkers receive their arguments as [`Value`]s and discover the shape of
//! each argument at call time:
//!
//! | Shape             | Variant            | Carries                          |
//! |-------------------|--------------------|----------------------------------|
//! | sequence          | `Value::Seq`       | element type + items             |
//! | associative map   | `Value::Map`       | key/value types + keyed entries  |
//! | string            | `Value::Str`       | text                             |
//! | ordered container | `Value::Ordered`   | `len` + `less(i, j)` capability  |
//!
//! Scalars, times, durations and named records complete the set. Equality
//! on `Value` is deep structural equality; [`Key`] is the hashable
//! projection used for map keys and multiset counting.

#![deny(unsafe_code)]

pub mod checker;
pub mod error;
pub mod key;
pub mod ordered;
pub mod types;
pub mod value;

pub use checker::{CheckResult, CheckerInfo};
pub use error::{ValueError, ValueResult};
pub use key::{FloatKey, Key};
pub use ordered::{OrderedContainer, OrderedValue, SortBy, SortedSlice};
pub use types::{Kind, TypeDesc};
pub use value::{Mapping, Record, Sequence, Typed, Value};
