//! The exhaustive rule matcher.
//!
//! For every marked property in discovery order, the [`RuleMatcher`]
//! evaluates every rule from the provider in provider order. There is no
//! first-match-wins short-circuit: a property combining a key and a position
//! is offered to both the value rule and the positional rule, and each rule
//! decides for itself.
//!
//! Rule failures are recorded in the [`MatchReport`] and never stop the loop.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use argbind_core::{
    ArgumentContext, BindError, ConfigurationError, Inspector, MarkedProperty, TargetSlot,
};
use tracing::{debug, trace};

use crate::provider::RuleProvider;

// =============================================================================
// MatchReport
// =============================================================================

/// A rule that recognized a property but failed to bind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFailure {
    /// The property name.
    pub property: &'static str,
    /// The rule that raised the error.
    pub rule: &'static str,
    /// What went wrong.
    pub error: BindError,
}

impl fmt::Display for PropertyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (rule '{}')", self.error, self.rule)
    }
}

/// What one matching pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Total `(rule, property)` evaluations.
    pub evaluations: usize,
    /// Properties at least one rule bound, in discovery order.
    pub matched: Vec<&'static str>,
    /// Bind errors raised by rules.
    pub failures: Vec<PropertyFailure>,
    /// Required properties that no rule bound and no rule failed on.
    pub missing: Vec<&'static str>,
}

impl MatchReport {
    /// Returns `true` when nothing failed and nothing required is missing.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.missing.is_empty()
    }

    /// Returns `true` if `property` was bound.
    pub fn is_matched(&self, property: &str) -> bool {
        self.matched.iter().any(|name| *name == property)
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "{} properties bound", self.matched.len());
        }

        let mut first = true;
        for failure in &self.failures {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
            first = false;
        }
        for property in &self.missing {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "missing required '{property}'")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// RuleMatcher
// =============================================================================

/// Applies every rule to every marked property of `T`.
pub struct RuleMatcher<T> {
    inspector: Arc<dyn Inspector<T>>,
    provider: Arc<dyn RuleProvider>,
    ignore_case: bool,
}

impl<T> RuleMatcher<T> {
    /// Creates a matcher over the given inspector and rule provider.
    pub fn new(inspector: Arc<dyn Inspector<T>>, provider: Arc<dyn RuleProvider>) -> Self {
        Self {
            inspector,
            provider,
            ignore_case: false,
        }
    }

    /// Compares switches and keys ignoring ASCII case.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Binds `tokens` into `target`.
    ///
    /// Fails only when `T` declares no marked property, in which case no rule
    /// is evaluated.
    pub fn match_target(
        &self,
        target: &mut T,
        tokens: &[String],
    ) -> Result<MatchReport, ConfigurationError> {
        let properties = self.inspector.marked_properties();
        if properties.is_empty() {
            return Err(ConfigurationError::NoMarkedProperties {
                type_name: type_name::<T>(),
            });
        }

        let rules = self.provider.rules();
        let args = ArgumentContext::new(
            tokens,
            properties.iter().map(MarkedProperty::marker),
            self.ignore_case,
        );
        let mut report = MatchReport::default();

        for property in &properties {
            let mut slot = TargetSlot::new(&mut *target, property);
            let mut matched = false;
            let mut failed = false;

            for rule in rules {
                report.evaluations += 1;
                match rule.apply(&mut slot, &args) {
                    Ok(true) => {
                        trace!(property = property.name(), rule = rule.name(), "Rule matched");
                        matched = true;
                    }
                    Ok(false) => {}
                    Err(error) => {
                        debug!(
                            property = property.name(),
                            rule = rule.name(),
                            error = %error,
                            "Rule failed to bind property"
                        );
                        failed = true;
                        report.failures.push(PropertyFailure {
                            property: property.name(),
                            rule: rule.name(),
                            error,
                        });
                    }
                }
            }

            if matched {
                report.matched.push(property.name());
            } else if !failed && property.marker().required {
                report.missing.push(property.name());
            }
        }

        debug!(
            target_type = type_name::<T>(),
            evaluations = report.evaluations,
            matched = report.matched.len(),
            failures = report.failures.len(),
            missing = report.missing.len(),
            "Matching finished"
        );
        Ok(report)
    }
}

impl<T> Clone for RuleMatcher<T> {
    fn clone(&self) -> Self {
        Self {
            inspector: Arc::clone(&self.inspector),
            provider: Arc::clone(&self.provider),
            ignore_case: self.ignore_case,
        }
    }
}

impl<T> fmt::Debug for RuleMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleMatcher")
            .field("target", &type_name::<T>())
            .field("rule_count", &self.provider.rules().len())
            .field("ignore_case", &self.ignore_case)
            .finish()
    }
}
