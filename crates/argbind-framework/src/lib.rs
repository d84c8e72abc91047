//! # Argbind Framework
//!
//! The binding engine built on top of the core schema types.
//!
//! This layer provides:
//! - Rule providers: [`StaticRules`], [`BuiltinRules`], [`RegisteredRules`]
//! - Built-in matching rules for switches, keyed values and positionals
//! - The [`RuleMatcher`], which evaluates every rule against every marked property
//! - The [`HandlerDispatcher`], which invokes at most one lifecycle handler
//! - The [`ArgumentAnalyzer`], the single entry point that ties them together
//!
//! ```text
//! ┌──────────────────┐     ┌───────────┐     ┌─────────────┐
//! │ ArgumentAnalyzer │────▶│ Inspector │────▶│ RuleMatcher │──▶ MatchRule × property
//! │                  │     └───────────┘     └─────────────┘
//! │                  │────▶ HandlerDispatcher ──▶ on_omitted / on_error / on_bound
//! └──────────────────┘
//! ```

pub mod analyzer;
pub mod dispatcher;
pub mod error;
pub mod matcher;
pub mod provider;
pub mod rules;
pub mod split;

pub use analyzer::{AnalyzerOptions, ArgumentAnalyzer, FailurePolicy, Outcome};
pub use dispatcher::HandlerDispatcher;
pub use error::{AnalyzeError, AnalyzeResult};
pub use matcher::{MatchReport, PropertyFailure, RuleMatcher};
pub use provider::{BuiltinRules, RegisteredRules, RuleProvider, StaticRules};
pub use rules::{PositionalRule, SwitchRule, ValueRule};
pub use split::{SplitError, shell_split};
