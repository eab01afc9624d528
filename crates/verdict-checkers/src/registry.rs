//! Checker registry: named lookup for harness integration.
//!
//! Holds checkers by name, optionally enforces argument counts, and logs
//! every evaluation through `tracing`.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};
use verdict_types::{CheckResult, CheckerInfo, Value};

use crate::checker::Checker;
use crate::config::{LogLevel, RegistryConfig};
use crate::containment::{Contains, IsIn};
use crate::equality::{MapEquals, SliceEquals};
use crate::error::{CheckerError, CheckerResult};
use crate::multiset::SameContent;
use crate::ordering::IsSorted;
use crate::temporal::DurationLessThan;

/// Named collection of checkers.
pub struct CheckerRegistry {
    checkers: BTreeMap<String, Box<dyn Checker>>,
    config: RegistryConfig,
}

impl CheckerRegistry {
    /// Create a registry holding every built-in stateless checker.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for checker in Self::default_checkers() {
            registry.register(checker);
        }
        registry
    }

    /// Create a registry with no checkers.
    pub fn empty() -> Self {
        Self {
            checkers: BTreeMap::new(),
            config: RegistryConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Built-in checkers that need no construction parameters.
    pub fn default_checkers() -> Vec<Box<dyn Checker>> {
        vec![
            Box::new(Contains::new()),
            Box::new(IsIn::new()),
            Box::new(SliceEquals::new()),
            Box::new(MapEquals::new()),
            Box::new(SameContent::new()),
            Box::new(IsSorted::new()),
            Box::new(DurationLessThan::new()),
        ]
    }

    /// Add a checker, replacing any checker registered under the same name.
    pub fn register(&mut self, checker: Box<dyn Checker>) -> Option<Box<dyn Checker>> {
        self.checkers.insert(checker.name().to_string(), checker)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Checker> {
        self.checkers.get(name).map(|c| c.as_ref())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.checkers.keys().map(String::as_str).collect()
    }

    /// Descriptors of every registered checker, sorted by name.
    pub fn descriptors(&self) -> Vec<&CheckerInfo> {
        self.checkers.values().map(|c| c.info()).collect()
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Run the named checker on `params`.
    ///
    /// The checker receives its descriptor's parameter labels as argument
    /// names.
    pub fn run(&self, name: &str, params: &[Value]) -> CheckerResult<CheckResult> {
        let checker = self
            .get(name)
            .ok_or_else(|| CheckerError::UnknownChecker(name.to_string()))?;
        let info = checker.info();

        if self.config.strict_arity && params.len() != info.arity() {
            return Err(CheckerError::ArityMismatch {
                checker: info.name.clone(),
                expected: info.arity(),
                found: params.len(),
            });
        }

        let result = checker.check(params, &info.params);
        self.log(&info.name, &result);
        Ok(result)
    }

    fn log(&self, checker: &str, result: &CheckResult) {
        if result.passed {
            if self.config.log_passes {
                debug!(checker, passed = true, "Check passed");
            }
            return;
        }
        let diagnostic = result.diagnostic.as_str();
        match self.config.failure_level {
            LogLevel::Debug => debug!(checker, passed = false, diagnostic, "Check failed"),
            LogLevel::Info => info!(checker, passed = false, diagnostic, "Check failed"),
            LogLevel::Warn => warn!(checker, passed = false, diagnostic, "Check failed"),
        }
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
