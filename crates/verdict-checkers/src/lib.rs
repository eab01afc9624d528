//! # verdict-checkers
//!
//! Generic assertion checkers over runtime-typed [`Value`]s.
//!
//! Every checker implements [`Checker`]: a descriptor ([`CheckerInfo`]) and
//! a `check` returning a [`CheckResult`]. A failed result with an empty
//! diagnostic is a plain mismatch; a non-empty diagnostic explains a usage
//! or type error, or pinpoints why the comparison failed.
//!
//! | Checker            | Params                                 | Verdict                                   |
//! |--------------------|----------------------------------------|-------------------------------------------|
//! | `Contains`         | Container, Value expected to contain   | element (deep equal) or substring present |
//! | `IsIn`             | Element, Container                     | `Contains` with arguments swapped         |
//! | `SliceEquals`      | obtained, expected                     | sequences deeply equal, in order          |
//! | `MapEquals`        | obtained, expected                     | maps deeply equal                         |
//! | `SameContent`      | obtained, expected                     | same multiset of elements                 |
//! | `IsSorted`         | container                              | ordered container is non-decreasing       |
//! | `TimeBetween`      | obtained                               | time within the bound interval            |
//! | `DurationLessThan` | obtained, expected                     | obtained strictly shorter                 |
//!
//! Checkers hold no mutable state and are `Send + Sync`. The
//! [`CheckerRegistry`] looks them up by name for harness integration.

#![deny(unsafe_code)]

pub mod checker;
pub mod config;
pub mod containment;
pub mod equality;
pub mod error;
pub mod multiset;
pub mod ordering;
pub mod registry;
pub mod temporal;

// Re-exports
pub use checker::Checker;
pub use config::{LogLevel, RegistryConfig};
pub use containment::{Contains, IsIn};
pub use equality::{MapEquals, SliceEquals};
pub use error::{CheckerError, CheckerResult};
pub use multiset::SameContent;
pub use ordering::IsSorted;
pub use registry::CheckerRegistry;
pub use temporal::{DurationLessThan, TimeBetween};
pub use verdict_types::{CheckResult, CheckerInfo, Value};
