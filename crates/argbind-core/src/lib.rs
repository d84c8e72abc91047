//! # Argbind Core
//!
//! The foundation types of the argbind argument binder.
//!
//! A caller describes a plain struct with markers, and the binder turns a
//! token array into a populated instance of it. This crate holds everything
//! that the engine and the derive macros agree on:
//!
//! - **Markers**: [`ArgMarker`] for bindable properties, [`LifecycleKind`]
//!   for handler methods
//! - **Marked members**: [`MarkedProperty`] and [`MarkedMethod`], the
//!   per-call handles produced during discovery
//! - **Schema traits**: [`ArgumentSchema`] and [`LifecycleHandlers`], usually
//!   generated by `#[derive(Arguments)]` and `#[lifecycle]`
//! - **Inspection**: the [`Inspector`] seam and its default [`SchemaInspector`]
//! - **Rules**: the [`MatchRule`] plugin trait, [`PropertySlot`],
//!   [`ArgumentContext`] and the link-time [`RULE_REGISTRY`]
//! - **Values**: [`ArgValue`] and the [`FromArgument`] conversion trait
//!
//! ```text
//! ┌────────────────┐     ┌───────────┐     ┌──────────────────┐
//! │ ArgumentSchema │────▶│ Inspector │────▶│ MarkedProperty<T>│──▶ MatchRule
//! │   (derived)    │     │           │────▶│ MarkedMethod<T>  │──▶ dispatch
//! └────────────────┘     └───────────┘     └──────────────────┘
//! ```

pub mod error;
pub mod inspector;
pub mod marker;
pub mod member;
pub mod registry;
pub mod rule;
pub mod schema;
pub mod value;

pub use error::{BindError, ConfigurationError, ConversionError};
pub use inspector::{Inspector, SchemaInspector};
pub use marker::{ArgMarker, LifecycleKind};
pub use member::{BindFn, InvokeFn, MarkedMethod, MarkedProperty};
pub use registry::{RULE_REGISTRY, RuleFactory, RuleRegistration, registered_rules};
pub use rule::{ArgumentContext, END_OF_OPTIONS, KeyToken, MatchRule, PropertySlot, TargetSlot};
pub use schema::{ArgumentSchema, LifecycleHandlers};
pub use value::{ArgValue, FromArgument};

#[doc(hidden)]
pub use linkme;
