//! Rule providers.
//!
//! A [`RuleProvider`] hands the matcher an ordered slice of rules. The order
//! is the caller's and is never rearranged.

use std::fmt;
use std::sync::Arc;

use argbind_core::{MatchRule, registered_rules};
use tracing::debug;

use crate::rules::{PositionalRule, SwitchRule, ValueRule};

/// Supplies the ordered set of matching rules in effect.
pub trait RuleProvider: Send + Sync {
    /// The rules, in evaluation order.
    fn rules(&self) -> &[Arc<dyn MatchRule>];
}

fn builtin() -> Vec<Arc<dyn MatchRule>> {
    vec![
        Arc::new(SwitchRule),
        Arc::new(ValueRule),
        Arc::new(PositionalRule),
    ]
}

fn names(rules: &[Arc<dyn MatchRule>]) -> Vec<&'static str> {
    rules.iter().map(|rule| rule.name()).collect()
}

// =============================================================================
// StaticRules
// =============================================================================

/// A caller-configured list of rules, in insertion order.
///
/// ```rust,ignore
/// let rules = StaticRules::new()
///     .with(SwitchRule)
///     .with(MyRule::default());
/// ```
#[derive(Clone, Default)]
pub struct StaticRules {
    rules: Vec<Arc<dyn MatchRule>>,
}

impl StaticRules {
    /// Creates an empty rule list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule (builder pattern).
    pub fn with(mut self, rule: impl MatchRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Appends an already shared rule.
    pub fn push(&mut self, rule: Arc<dyn MatchRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule was added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleProvider for StaticRules {
    fn rules(&self) -> &[Arc<dyn MatchRule>] {
        &self.rules
    }
}

impl fmt::Debug for StaticRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticRules")
            .field("rules", &names(&self.rules))
            .finish()
    }
}

// =============================================================================
// BuiltinRules
// =============================================================================

/// The built-in rules: switch, then keyed value, then positional.
#[derive(Clone)]
pub struct BuiltinRules {
    rules: Vec<Arc<dyn MatchRule>>,
}

impl BuiltinRules {
    /// Creates the built-in rule set.
    pub fn new() -> Self {
        Self { rules: builtin() }
    }
}

impl Default for BuiltinRules {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleProvider for BuiltinRules {
    fn rules(&self) -> &[Arc<dyn MatchRule>] {
        &self.rules
    }
}

impl fmt::Debug for BuiltinRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinRules")
            .field("rules", &names(&self.rules))
            .finish()
    }
}

// =============================================================================
// RegisteredRules
// =============================================================================

/// The built-in rules followed by every rule contributed through
/// `#[register_rule]`, sorted by `(priority, name)`.
///
/// The registry is read once, when the provider is built.
#[derive(Clone)]
pub struct RegisteredRules {
    rules: Vec<Arc<dyn MatchRule>>,
}

impl RegisteredRules {
    /// Collects the built-in and registered rules.
    pub fn new() -> Self {
        let mut rules = builtin();
        for registration in registered_rules() {
            debug!(
                rule = registration.name,
                priority = registration.priority,
                "Loading registered rule"
            );
            rules.push(Arc::from((registration.factory)()));
        }
        Self { rules }
    }
}

impl Default for RegisteredRules {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleProvider for RegisteredRules {
    fn rules(&self) -> &[Arc<dyn MatchRule>] {
        &self.rules
    }
}

impl fmt::Debug for RegisteredRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredRules")
            .field("rules", &names(&self.rules))
            .finish()
    }
}
