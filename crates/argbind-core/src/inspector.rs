//! Metadata discovery over target types.
//!
//! The [`Inspector`] trait is the seam the matcher and dispatcher discover
//! members through. [`SchemaInspector`] answers from the generated
//! [`ArgumentSchema`]; tests substitute their own implementations to count
//! discovery calls or to return an absent handler table.

use std::any::type_name;

use tracing::trace;

use crate::marker::LifecycleKind;
use crate::member::{MarkedMethod, MarkedProperty};
use crate::schema::ArgumentSchema;

/// Discovers the marked members of `T`.
pub trait Inspector<T>: Send + Sync {
    /// Returns the marked properties of `T` in declaration order.
    fn marked_properties(&self) -> Vec<MarkedProperty<T>>;

    /// Returns the handler methods of `kind`, or `None` when `T` declares no
    /// handler table.
    fn marked_methods(&self, kind: LifecycleKind) -> Option<Vec<MarkedMethod<T>>>;
}

/// Inspector backed by the static [`ArgumentSchema`] of `T`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaInspector;

impl<T: ArgumentSchema> Inspector<T> for SchemaInspector {
    fn marked_properties(&self) -> Vec<MarkedProperty<T>> {
        let properties = T::properties();
        trace!(
            target_type = type_name::<T>(),
            count = properties.len(),
            "Discovered marked properties"
        );
        properties
    }

    fn marked_methods(&self, kind: LifecycleKind) -> Option<Vec<MarkedMethod<T>>> {
        let methods = T::handlers(kind);
        trace!(
            target_type = type_name::<T>(),
            kind = %kind,
            count = methods.as_ref().map(Vec::len),
            "Discovered marked methods"
        );
        methods
    }
}
