//! The argument analyzer, the single entry point of the binder.
//!
//! # State machine
//!
//! ```text
//! Start ──(no tokens)──────▶ dispatch ArgumentsOmitted ──▶ Omitted
//!   │
//!   └──(tokens)──▶ discover properties ──(none)──▶ Configuration error
//!                        │
//!                        └──▶ RuleMatcher ──(clean)──▶ dispatch ArgumentsBound ──▶ Bound
//!                                  │
//!                                  └──(failures)──▶ FailurePolicy
//! ```
//!
//! On the omitted path the inspector is never asked for properties.
//!
//! # Example
//!
//! ```rust,ignore
//! use argbind_framework::ArgumentAnalyzer;
//!
//! let analyzer = ArgumentAnalyzer::<CopyArgs>::new();
//! let mut args = CopyArgs::default();
//! match analyzer.analyze_into(&mut args, ["a.txt", "b.txt"])? {
//!     Outcome::Bound(report) => println!("bound {:?}", report.matched),
//!     Outcome::Omitted { .. } => return Ok(()),
//!     Outcome::Rejected(report) => eprintln!("{report}"),
//! }
//! ```

use std::any::type_name;
use std::ffi::OsString;
use std::fmt;
use std::sync::Arc;

use argbind_core::{ArgumentSchema, Inspector, LifecycleKind, SchemaInspector};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, span};

use crate::dispatcher::HandlerDispatcher;
use crate::error::{AnalyzeError, AnalyzeResult};
use crate::matcher::{MatchReport, RuleMatcher};
use crate::provider::{BuiltinRules, RuleProvider};
use crate::split::shell_split;

// =============================================================================
// Options
// =============================================================================

/// What to do when binding leaves failures or missing required properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Keep going as if everything bound.
    #[default]
    Ignore,
    /// Invoke the `ArgumentError` handler and report the call as rejected.
    Dispatch,
    /// Return [`AnalyzeError::Rejected`] without invoking any handler.
    Fail,
}

/// Tunables of an [`ArgumentAnalyzer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerOptions {
    /// Failure handling after matching.
    pub on_failure: FailurePolicy,
    /// Compare switches and keys ignoring ASCII case.
    pub ignore_case: bool,
}

impl AnalyzerOptions {
    /// Sets the failure policy.
    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Sets case-insensitive matching.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// How an analysis call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No tokens were given. Carries the invoked handler's name, if any.
    Omitted {
        /// The `ArgumentsOmitted` handler that ran.
        handler: Option<&'static str>,
    },
    /// Matching ran and its result was accepted.
    Bound(MatchReport),
    /// Matching failed and the `ArgumentError` handler was dispatched.
    Rejected(MatchReport),
}

impl Outcome {
    /// The match report, unless the call took the omitted path.
    pub fn report(&self) -> Option<&MatchReport> {
        match self {
            Outcome::Omitted { .. } => None,
            Outcome::Bound(report) | Outcome::Rejected(report) => Some(report),
        }
    }

    /// Returns `true` for [`Outcome::Omitted`].
    pub fn is_omitted(&self) -> bool {
        matches!(self, Outcome::Omitted { .. })
    }

    /// Returns `true` for [`Outcome::Bound`].
    pub fn is_bound(&self) -> bool {
        matches!(self, Outcome::Bound(_))
    }
}

// =============================================================================
// ArgumentAnalyzer
// =============================================================================

/// Populates instances of `T` from raw command-line tokens.
///
/// An analyzer holds no per-call state and can be shared across threads.
pub struct ArgumentAnalyzer<T> {
    inspector: Arc<dyn Inspector<T>>,
    provider: Arc<dyn RuleProvider>,
    options: AnalyzerOptions,
}

impl<T: ArgumentSchema> ArgumentAnalyzer<T> {
    /// Creates an analyzer reading the derived schema of `T` with the
    /// built-in rules.
    pub fn new() -> Self {
        Self::from_parts(Arc::new(SchemaInspector), Arc::new(BuiltinRules::new()))
    }
}

impl<T: ArgumentSchema> Default for ArgumentAnalyzer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArgumentAnalyzer<T> {
    /// Creates an analyzer from an explicit inspector and rule provider.
    pub fn from_parts(inspector: Arc<dyn Inspector<T>>, provider: Arc<dyn RuleProvider>) -> Self {
        Self {
            inspector,
            provider,
            options: AnalyzerOptions::default(),
        }
    }

    /// Replaces the rule provider (builder pattern).
    pub fn with_rules(mut self, provider: impl RuleProvider + 'static) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Replaces the options (builder pattern).
    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Analyzes `args` into a caller-supplied `target`.
    pub fn analyze_into<I, S>(&self, target: &mut T, args: I) -> AnalyzeResult<Outcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
        self.run(target, &tokens)
    }

    /// Analyzes OS-provided arguments, such as `std::env::args_os().skip(1)`.
    ///
    /// Fails with [`AnalyzeError::InvalidCall`] on a token that is not valid
    /// UTF-8.
    pub fn analyze_os<I>(&self, target: &mut T, args: I) -> AnalyzeResult<Outcome>
    where
        I: IntoIterator<Item = OsString>,
    {
        let tokens = args
            .into_iter()
            .enumerate()
            .map(|(index, arg)| {
                arg.into_string().map_err(|arg| {
                    AnalyzeError::invalid_call(format!(
                        "argument {index} is not valid UTF-8: {}",
                        arg.to_string_lossy()
                    ))
                })
            })
            .collect::<AnalyzeResult<Vec<_>>>()?;
        self.run(target, &tokens)
    }

    /// Splits `line` shell-style and analyzes the resulting tokens.
    pub fn analyze_line(&self, target: &mut T, line: &str) -> AnalyzeResult<Outcome> {
        let tokens = shell_split(line).map_err(|e| AnalyzeError::invalid_call(e.to_string()))?;
        self.run(target, &tokens)
    }

    /// Builds a default `T` and analyzes `args` into it.
    pub fn analyze<I, S>(&self, args: I) -> AnalyzeResult<T>
    where
        T: Default,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut target = T::default();
        self.analyze_into(&mut target, args)?;
        Ok(target)
    }

    fn run(&self, target: &mut T, tokens: &[String]) -> AnalyzeResult<Outcome> {
        let span = span!(
            Level::DEBUG,
            "analyze",
            target_type = type_name::<T>(),
            tokens = tokens.len()
        );
        let _enter = span.enter();

        let dispatcher = HandlerDispatcher::new(Arc::clone(&self.inspector));

        if tokens.is_empty() {
            let handler = dispatcher.dispatch(target, LifecycleKind::ArgumentsOmitted)?;
            debug!(handler, "Arguments omitted");
            return Ok(Outcome::Omitted { handler });
        }

        let matcher = RuleMatcher::new(Arc::clone(&self.inspector), Arc::clone(&self.provider))
            .ignore_case(self.options.ignore_case);
        let report = matcher.match_target(target, tokens)?;

        if !report.is_clean() {
            debug!(policy = ?self.options.on_failure, %report, "Binding incomplete");
            match self.options.on_failure {
                FailurePolicy::Ignore => {}
                FailurePolicy::Dispatch => {
                    dispatcher.dispatch(target, LifecycleKind::ArgumentError)?;
                    return Ok(Outcome::Rejected(report));
                }
                FailurePolicy::Fail => return Err(AnalyzeError::Rejected(report)),
            }
        }

        dispatcher.dispatch(target, LifecycleKind::ArgumentsBound)?;
        Ok(Outcome::Bound(report))
    }
}

impl<T> Clone for ArgumentAnalyzer<T> {
    fn clone(&self) -> Self {
        Self {
            inspector: Arc::clone(&self.inspector),
            provider: Arc::clone(&self.provider),
            options: self.options,
        }
    }
}

impl<T> fmt::Debug for ArgumentAnalyzer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentAnalyzer")
            .field("target", &type_name::<T>())
            .field("rule_count", &self.provider.rules().len())
            .field("options", &self.options)
            .finish()
    }
}
