//! The matching rule plugin interface.
//!
//! A [`MatchRule`] looks at one property through a [`PropertySlot`] and at the
//! raw tokens through an [`ArgumentContext`]. If it recognizes the property's
//! marker criteria in the tokens, it binds the value and returns `Ok(true)`.
//! Otherwise it leaves the property alone and returns `Ok(false)`.
//!
//! Rules never see the concrete target type. The slot erases it, which keeps
//! rules plain `dyn MatchRule` objects that one provider can share across
//! every target type.
//!
//! ```rust,ignore
//! use argbind_core::{ArgValue, ArgumentContext, BindError, MatchRule, PropertySlot};
//!
//! /// Binds `true` when the token `+all` is present and the property is keyed `all`.
//! struct PlusAll;
//!
//! impl MatchRule for PlusAll {
//!     fn name(&self) -> &'static str {
//!         "plus_all"
//!     }
//!
//!     fn apply(&self, slot: &mut dyn PropertySlot, args: &ArgumentContext<'_>) -> Result<bool, BindError> {
//!         if slot.name() != "all" || !args.tokens().iter().any(|t| t == "+all") {
//!             return Ok(false);
//!         }
//!         slot.bind(ArgValue::Switch)?;
//!         Ok(true)
//!     }
//! }
//! ```

use crate::error::BindError;
use crate::marker::ArgMarker;
use crate::member::MarkedProperty;
use crate::value::ArgValue;

// =============================================================================
// Property Slot
// =============================================================================

/// One marked property of one target instance, with the target type erased.
pub trait PropertySlot {
    /// The property name.
    fn name(&self) -> &'static str;

    /// The property's marker.
    fn marker(&self) -> &ArgMarker;

    /// Binds `value` into the property.
    fn bind(&mut self, value: ArgValue) -> Result<(), BindError>;
}

/// The [`PropertySlot`] pairing a `&mut T` with one of its marked properties.
pub struct TargetSlot<'a, T> {
    target: &'a mut T,
    property: &'a MarkedProperty<T>,
    binds: usize,
}

impl<'a, T> TargetSlot<'a, T> {
    /// Pairs `target` with `property`.
    pub fn new(target: &'a mut T, property: &'a MarkedProperty<T>) -> Self {
        Self {
            target,
            property,
            binds: 0,
        }
    }

    /// How many successful binds went through this slot.
    pub fn binds(&self) -> usize {
        self.binds
    }
}

impl<T> PropertySlot for TargetSlot<'_, T> {
    fn name(&self) -> &'static str {
        self.property.name()
    }

    fn marker(&self) -> &ArgMarker {
        self.property.marker()
    }

    fn bind(&mut self, value: ArgValue) -> Result<(), BindError> {
        self.property.bind(self.target, value)?;
        self.binds += 1;
        Ok(())
    }
}

// =============================================================================
// Argument Context
// =============================================================================

/// A token that names one of a property's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyToken<'t> {
    /// The declared key that matched.
    pub key: &'static str,
    /// The inline value after `=` or `:`, if any.
    pub inline: Option<&'t str>,
}

/// The raw tokens of one analysis call plus the option vocabulary of the
/// target type.
///
/// The vocabulary (every declared switch and key) lets rules tell option
/// tokens and their values apart from positional tokens without knowing
/// about other properties.
#[derive(Debug, Clone)]
pub struct ArgumentContext<'a> {
    tokens: &'a [String],
    switches: Vec<&'static str>,
    keys: Vec<&'static str>,
    ignore_case: bool,
}

/// Everything after this token is positional.
pub const END_OF_OPTIONS: &str = "--";

impl<'a> ArgumentContext<'a> {
    /// Builds a context from the tokens and the markers of every property.
    pub fn new<'m>(
        tokens: &'a [String],
        markers: impl IntoIterator<Item = &'m ArgMarker>,
        ignore_case: bool,
    ) -> Self {
        let mut switches = Vec::new();
        let mut keys = Vec::new();
        for marker in markers {
            switches.extend_from_slice(marker.switches);
            keys.extend_from_slice(marker.keys);
        }
        Self {
            tokens,
            switches,
            keys,
            ignore_case,
        }
    }

    /// The raw tokens, in order.
    pub fn tokens(&self) -> &'a [String] {
        self.tokens
    }

    /// The tokens before the first `--`, where options may appear.
    pub fn option_tokens(&self) -> &'a [String] {
        let end = self
            .tokens
            .iter()
            .position(|token| token == END_OF_OPTIONS)
            .unwrap_or(self.tokens.len());
        &self.tokens[..end]
    }

    /// Whether comparisons ignore ASCII case.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Compares a token with a declared switch or key.
    pub fn token_eq(&self, token: &str, declared: &str) -> bool {
        if self.ignore_case {
            token.eq_ignore_ascii_case(declared)
        } else {
            token == declared
        }
    }

    /// Returns the key among `keys` that `token` names.
    ///
    /// Matches `key` exactly, or `key=value` / `key:value` with an inline value.
    pub fn split_key<'t>(&self, token: &'t str, keys: &[&'static str]) -> Option<KeyToken<'t>> {
        for &key in keys {
            if self.token_eq(token, key) {
                return Some(KeyToken { key, inline: None });
            }
            let Some(head) = token.get(..key.len()) else {
                continue;
            };
            if !self.token_eq(head, key) {
                continue;
            }
            let rest = &token[key.len()..];
            if let Some(value) = rest.strip_prefix('=').or_else(|| rest.strip_prefix(':')) {
                return Some(KeyToken {
                    key,
                    inline: Some(value),
                });
            }
        }
        None
    }

    /// Whether `token` is any declared switch.
    pub fn is_switch(&self, token: &str) -> bool {
        self.switches.iter().any(|s| self.token_eq(token, s))
    }

    /// Whether `token` is any declared switch or names any declared key.
    pub fn is_option(&self, token: &str) -> bool {
        self.is_switch(token) || self.split_key(token, &self.keys).is_some()
    }

    /// The positional tokens: everything that is neither a declared option
    /// nor the separate value of a declared key. Tokens after `--` are always
    /// positional.
    pub fn positionals(&self) -> Vec<&'a str> {
        let mut positionals = Vec::new();
        let mut iter = self.tokens.iter();

        while let Some(token) = iter.next() {
            if token == END_OF_OPTIONS {
                positionals.extend(iter.by_ref().map(String::as_str));
                break;
            }
            if self.is_switch(token) {
                continue;
            }
            if let Some(key) = self.split_key(token, &self.keys) {
                if key.inline.is_none() {
                    // A separate value belongs to the key unless it is itself an option.
                    let rest = iter.as_slice();
                    if rest.first().is_some_and(|next| !self.is_option(next)) {
                        iter.next();
                    }
                }
                continue;
            }
            positionals.push(token.as_str());
        }

        positionals
    }
}

// =============================================================================
// Match Rule
// =============================================================================

/// A pluggable policy that recognizes a token pattern and binds a value.
pub trait MatchRule: Send + Sync {
    /// A stable name for logging and reports.
    fn name(&self) -> &'static str;

    /// Tries to match `slot` against `args`.
    ///
    /// Returns `Ok(true)` after binding, `Ok(false)` when the rule does not
    /// apply, and an error when the rule recognized the property but could
    /// not bind it.
    fn apply(
        &self,
        slot: &mut dyn PropertySlot,
        args: &ArgumentContext<'_>,
    ) -> Result<bool, BindError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKERS: [ArgMarker; 3] = [
        ArgMarker::new().with_switches(&["-v", "/?"]),
        ArgMarker::new().with_keys(&["--name", "-n"]),
        ArgMarker::new().with_position(0),
    ];

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_key_forms() {
        let raw = tokens(&[]);
        let ctx = ArgumentContext::new(&raw, &MARKERS, false);
        let keys = MARKERS[1].keys;

        assert_eq!(
            ctx.split_key("--name", keys),
            Some(KeyToken {
                key: "--name",
                inline: None
            })
        );
        assert_eq!(
            ctx.split_key("--name=bob", keys).and_then(|k| k.inline),
            Some("bob")
        );
        assert_eq!(ctx.split_key("-n:alice", keys).and_then(|k| k.inline), Some("alice"));
        assert_eq!(ctx.split_key("--names", keys), None);
        assert_eq!(ctx.split_key("--NAME", keys), None);
    }

    #[test]
    fn test_ignore_case() {
        let raw = tokens(&[]);
        let ctx = ArgumentContext::new(&raw, &MARKERS, true);
        assert!(ctx.is_switch("-V"));
        assert!(ctx.split_key("--NAME=x", MARKERS[1].keys).is_some());
    }

    #[test]
    fn test_positionals_skip_options_and_values() {
        let raw = tokens(&["-v", "first", "--name", "bob", "second", "-n=al", "third"]);
        let ctx = ArgumentContext::new(&raw, &MARKERS, false);
        assert_eq!(ctx.positionals(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_key_followed_by_option_keeps_no_value() {
        let raw = tokens(&["--name", "-v", "file"]);
        let ctx = ArgumentContext::new(&raw, &MARKERS, false);
        assert_eq!(ctx.positionals(), vec!["file"]);
    }

    #[test]
    fn test_end_of_options() {
        let raw = tokens(&["a", "--", "-v", "--name"]);
        let ctx = ArgumentContext::new(&raw, &MARKERS, false);
        assert_eq!(ctx.positionals(), vec!["a", "-v", "--name"]);
        assert_eq!(ctx.option_tokens(), &raw[..1]);
    }

    #[test]
    fn test_option_tokens_without_separator() {
        let raw = tokens(&["-v", "a"]);
        let ctx = ArgumentContext::new(&raw, &MARKERS, false);
        assert_eq!(ctx.option_tokens(), raw.as_slice());
    }
}
