//! # Argbind
//!
//! Declarative, rule-based command-line argument binding for plain Rust structs.
//!
//! ## Overview
//!
//! A struct describes its arguments with markers. The binder discovers the
//! marked fields, runs every matching rule against every field, and invokes
//! at most one lifecycle handler per outcome:
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │ ArgumentAnalyzer │────▶│ SchemaInspector │────▶│ RuleMatcher │──▶ every rule × every field
//! │                  │     └─────────────────┘     └─────────────┘
//! │                  │────▶ HandlerDispatcher ──▶ #[on_omitted] / #[on_error] / #[on_bound]
//! └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use argbind::prelude::*;
//!
//! #[derive(Debug, Default, Arguments)]
//! #[arguments(lifecycle)]
//! struct CopyArgs {
//!     #[arg(position = 0, required)]
//!     source: String,
//!     #[arg(position = 1, key = "--out")]
//!     dest: Option<String>,
//!     #[arg(switch = "/?", switch = "--help")]
//!     help: bool,
//! }
//!
//! #[lifecycle]
//! impl CopyArgs {
//!     #[on_omitted]
//!     fn usage(&self) {
//!         eprintln!("usage: copy <source> [--out <dest>]");
//!     }
//! }
//!
//! fn main() -> Result<(), AnalyzeError> {
//!     let args: CopyArgs = argbind::analyze_env()?;
//!     println!("{args:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `macros`: `#[derive(Arguments)]`, `#[lifecycle]`, `#[register_rule]` (default)
//! - `toml-config`: `argbind.toml` configuration files (default)
//! - `yaml-config`: `argbind.yaml` configuration files
//! - `json-log`: JSON log output

// Lets the derive output (`::argbind::core::...`) resolve inside this crate too.
#[doc(hidden)]
extern crate self as argbind;

pub use argbind_core as core;
pub use argbind_framework as framework;
pub use argbind_runtime as runtime;

#[cfg(feature = "macros")]
pub use argbind_macros::{Arguments, lifecycle, register_rule};

pub use argbind_framework::{AnalyzeError, AnalyzeResult, ArgumentAnalyzer, Outcome};

use argbind_core::ArgumentSchema;

/// Builds a default `T` and binds `args` into it with the built-in rules.
///
/// ```rust,ignore
/// let args: CopyArgs = argbind::analyze(["a.txt", "--out", "b.txt"])?;
/// ```
pub fn analyze<T, I, S>(args: I) -> AnalyzeResult<T>
where
    T: ArgumentSchema + Default,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ArgumentAnalyzer::<T>::new().analyze(args)
}

/// Like [`analyze`], reading the process arguments (without the program name).
///
/// Fails with [`AnalyzeError::InvalidCall`] when an argument is not valid UTF-8.
pub fn analyze_env<T>() -> AnalyzeResult<T>
where
    T: ArgumentSchema + Default,
{
    let mut target = T::default();
    ArgumentAnalyzer::<T>::new().analyze_os(&mut target, std::env::args_os().skip(1))?;
    Ok(target)
}

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use argbind::prelude::*;
/// ```
pub mod prelude {
    // Macros
    #[cfg(feature = "macros")]
    pub use argbind_macros::{Arguments, lifecycle, register_rule};

    // Entry points and outcomes
    pub use argbind_framework::{
        AnalyzeError, AnalyzeResult, AnalyzerOptions, ArgumentAnalyzer, FailurePolicy, MatchReport,
        Outcome,
    };

    // Rule plugin interface
    pub use argbind_core::{ArgValue, ArgumentContext, BindError, MatchRule, PropertySlot};
    pub use argbind_framework::{BuiltinRules, RegisteredRules, StaticRules};

    // Schema traits, for hand-written schemas
    pub use argbind_core::{ArgMarker, ArgumentSchema, FromArgument, LifecycleHandlers};

    // Configuration and logging
    pub use argbind_runtime::{ArgbindConfig, ConfigLoader, LoggingBuilder};
}
