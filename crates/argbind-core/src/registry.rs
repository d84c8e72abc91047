//! Link-time registry of matching rules.
//!
//! Any crate in the final binary can contribute a rule with
//! `#[register_rule]`. The attribute appends a [`RuleRegistration`] to the
//! [`RULE_REGISTRY`] distributed slice:
//!
//! ```rust,ignore
//! use argbind::prelude::*;
//!
//! #[register_rule(priority = 10)]
//! fn plus_all() -> PlusAll {
//!     PlusAll
//! }
//! ```
//!
//! Link order is unspecified, so [`registered_rules`] sorts entries by
//! `(priority, name)` to keep provider order deterministic.

use linkme::distributed_slice;
use tracing::warn;

use crate::rule::MatchRule;

/// Constructs a registered rule.
pub type RuleFactory = fn() -> Box<dyn MatchRule>;

/// One entry of the [`RULE_REGISTRY`].
#[derive(Clone, Copy)]
pub struct RuleRegistration {
    /// Rule name, unique per binary.
    pub name: &'static str,
    /// Lower runs first.
    pub priority: i32,
    /// Builds the rule.
    pub factory: RuleFactory,
}

impl std::fmt::Debug for RuleRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistration")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Registry of rules contributed via `#[register_rule]`.
#[distributed_slice]
pub static RULE_REGISTRY: [RuleRegistration];

/// Returns the registered rules sorted by `(priority, name)`.
///
/// Entries sharing a name are all kept, with a warning for each duplicate.
pub fn registered_rules() -> Vec<RuleRegistration> {
    sorted(&RULE_REGISTRY)
}

fn sorted(entries: &[RuleRegistration]) -> Vec<RuleRegistration> {
    let mut entries = entries.to_vec();
    entries.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(b.name)));

    for pair in entries.windows(2) {
        if pair[0].name == pair[1].name {
            warn!(rule = pair[0].name, "Multiple rules registered under one name");
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BindError;
    use crate::rule::{ArgumentContext, PropertySlot};

    struct Never;

    impl MatchRule for Never {
        fn name(&self) -> &'static str {
            "never"
        }

        fn apply(
            &self,
            _slot: &mut dyn PropertySlot,
            _args: &ArgumentContext<'_>,
        ) -> Result<bool, BindError> {
            Ok(false)
        }
    }

    fn never() -> Box<dyn MatchRule> {
        Box::new(Never)
    }

    fn entry(name: &'static str, priority: i32) -> RuleRegistration {
        RuleRegistration {
            name,
            priority,
            factory: never,
        }
    }

    #[test]
    fn test_sorted_by_priority_then_name() {
        let entries = [entry("zeta", 0), entry("alpha", 5), entry("beta", 0)];
        let names: Vec<_> = sorted(&entries).iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["beta", "zeta", "alpha"]);
    }

    #[test]
    fn test_factory_builds_rule() {
        let rule = (entry("never", 0).factory)();
        assert_eq!(rule.name(), "never");
    }
}
