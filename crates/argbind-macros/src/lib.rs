//! Procedural macros for the argbind argument binder.
//!
//! This crate provides:
//!
//! - `#[derive(Arguments)]` - Generates the `ArgumentSchema` of a struct
//! - `#[lifecycle]` - Registers `#[on_omitted]`, `#[on_error]` and `#[on_bound]` handlers
//! - `#[register_rule]` - Adds a matching rule to the link-time rule registry
//!
//! Generated code refers to `::argbind::core`, so depend on the `argbind`
//! facade rather than on this crate directly.
//!
//! ```rust,ignore
//! use argbind::prelude::*;
//!
//! #[derive(Default, Arguments)]
//! #[arguments(lifecycle)]
//! struct CopyArgs {
//!     /// File to copy.
//!     #[arg(position = 0, required)]
//!     source: String,
//!     #[arg(position = 1, key = "--out", key = "-o")]
//!     dest: Option<String>,
//!     #[arg(switch = "-f", switch = "--force")]
//!     force: bool,
//! }
//!
//! #[lifecycle]
//! impl CopyArgs {
//!     #[on_omitted]
//!     fn usage(&self) {
//!         eprintln!("usage: copy <source> [dest] [-f]");
//!     }
//! }
//! ```

mod arguments;
mod lifecycle;
mod rule;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemImpl, parse_macro_input};

/// Derives `ArgumentSchema` for a struct with named fields.
///
/// Only fields carrying `#[arg(...)]` are bindable, in declaration order.
///
/// # Field attributes
///
/// | Key | Example | Description |
/// |-----|---------|-------------|
/// | `switch` | `switch = "/?"` | Exact token that sets the field; repeatable |
/// | `key` | `key = "--name"` | Key introducing a value; repeatable |
/// | `position` | `position = 0` | Index among positional tokens |
/// | `trailing` | `trailing` | With `position`, takes every positional from there on |
/// | `required` | `required` | Reported as missing when nothing binds it |
/// | `help` | `help = "..."` | Description; defaults to the doc comment |
///
/// The field type must implement `FromArgument`.
///
/// # Struct attributes
///
/// - `#[arguments(lifecycle)]` - Handlers come from a `#[lifecycle]` impl block.
///   Without it an empty `LifecycleHandlers` impl is generated.
#[proc_macro_derive(Arguments, attributes(arg, arguments))]
pub fn derive_arguments(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match arguments::derive_arguments(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Turns marked methods of an inherent impl block into lifecycle handlers.
///
/// Each handler takes `&self` or `&mut self` and nothing else. Its return
/// value is discarded.
///
/// | Marker | Dispatched when |
/// |--------|-----------------|
/// | `#[on_omitted]` | no tokens were given |
/// | `#[on_error]` | binding failed under the `dispatch` failure policy |
/// | `#[on_bound]` | binding completed |
///
/// Declaring more than one handler of a kind compiles, but analysis then
/// fails with a configuration error.
#[proc_macro_attribute]
pub fn lifecycle(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[lifecycle] takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    let item = parse_macro_input!(item as ItemImpl);

    match lifecycle::expand(item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Registers a matching rule in the link-time rule registry.
///
/// The function takes no arguments and returns a concrete `MatchRule`.
///
/// ```rust,ignore
/// #[register_rule(priority = 10, name = "plus_all")]
/// fn plus_all() -> PlusAll {
///     PlusAll
/// }
/// ```
///
/// `priority` defaults to `0`, `name` to the function name. Lower priorities
/// run first.
#[proc_macro_attribute]
pub fn register_rule(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = rule::RuleArgs::default();
    let parser = syn::meta::parser(|meta| args.parse(meta));
    parse_macro_input!(attr with parser);
    let func = parse_macro_input!(item as ItemFn);

    match rule::expand(args, func) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
