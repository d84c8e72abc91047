//! Static schema traits implemented by target types.
//!
//! Both traits are normally generated:
//!
//! - `#[derive(Arguments)]` implements [`ArgumentSchema`] from `#[arg(...)]`
//!   fields and, unless `#[arguments(lifecycle)]` is set, an empty
//!   [`LifecycleHandlers`].
//! - `#[lifecycle]` on an inherent impl block implements
//!   [`LifecycleHandlers`] from methods tagged `#[on_omitted]`,
//!   `#[on_error]` or `#[on_bound]`.

use crate::marker::LifecycleKind;
use crate::member::{MarkedMethod, MarkedProperty};

/// Lifecycle handler methods declared by a target type.
pub trait LifecycleHandlers: Sized {
    /// Returns the handlers of `kind`.
    ///
    /// `None` means the type declares no handler table at all. Consumers treat
    /// it exactly like an empty list.
    fn handlers(kind: LifecycleKind) -> Option<Vec<MarkedMethod<Self>>> {
        let _ = kind;
        None
    }
}

/// Bindable properties declared by a target type.
pub trait ArgumentSchema: LifecycleHandlers {
    /// Returns the marked properties in declaration order.
    fn properties() -> Vec<MarkedProperty<Self>>;
}
