//! Marked member handles produced by discovery.
//!
//! Handles are plain data: a marker, a member name and a function pointer.
//! They are built fresh for each analysis call and dropped with it.

use std::fmt;

use crate::error::BindError;
use crate::marker::{ArgMarker, LifecycleKind};
use crate::value::ArgValue;

/// Stores a value into one property of `T`.
pub type BindFn<T> = fn(&mut T, ArgValue) -> Result<(), BindError>;

/// Invokes one parameterless handler method of `T`.
pub type InvokeFn<T> = fn(&mut T);

/// A property of `T` carrying an [`ArgMarker`].
pub struct MarkedProperty<T> {
    name: &'static str,
    marker: ArgMarker,
    bind: BindFn<T>,
}

impl<T> MarkedProperty<T> {
    /// Creates a property handle.
    pub const fn new(name: &'static str, marker: ArgMarker, bind: BindFn<T>) -> Self {
        Self { name, marker, bind }
    }

    /// The member name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The marker attached to the member.
    pub fn marker(&self) -> &ArgMarker {
        &self.marker
    }

    /// Binds `value` into the property of `target`.
    pub fn bind(&self, target: &mut T, value: ArgValue) -> Result<(), BindError> {
        (self.bind)(target, value)
    }
}

// Manual impls: `T` itself need not be `Clone` or `Debug`.
impl<T> Clone for MarkedProperty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MarkedProperty<T> {}

impl<T> fmt::Debug for MarkedProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkedProperty")
            .field("name", &self.name)
            .field("marker", &self.marker)
            .finish()
    }
}

/// A parameterless method of `T` marked as a lifecycle handler.
pub struct MarkedMethod<T> {
    kind: LifecycleKind,
    name: &'static str,
    invoke: InvokeFn<T>,
}

impl<T> MarkedMethod<T> {
    /// Creates a method handle.
    pub const fn new(kind: LifecycleKind, name: &'static str, invoke: InvokeFn<T>) -> Self {
        Self { kind, name, invoke }
    }

    /// The lifecycle kind this method handles.
    pub fn kind(&self) -> LifecycleKind {
        self.kind
    }

    /// The method name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the method against `target`.
    pub fn invoke(&self, target: &mut T) {
        (self.invoke)(target)
    }
}

impl<T> Clone for MarkedMethod<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MarkedMethod<T> {}

impl<T> fmt::Debug for MarkedMethod<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkedMethod")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FromArgument;

    #[derive(Default)]
    struct Target {
        verbose: bool,
        calls: usize,
    }

    #[test]
    fn test_property_bind_runs_setter() {
        let property = MarkedProperty::<Target>::new(
            "verbose",
            ArgMarker::new().with_switches(&["-v"]),
            |target: &mut Target, value| {
                bool::assign(&mut target.verbose, value).map_err(|source| {
                    BindError::Conversion {
                        property: "verbose",
                        source,
                    }
                })
            },
        );

        let mut target = Target::default();
        property.bind(&mut target, ArgValue::Switch).unwrap();
        assert!(target.verbose);
        assert_eq!(property.name(), "verbose");
        assert_eq!(property.marker().switches, &["-v"]);
    }

    #[test]
    fn test_method_invoke() {
        let method = MarkedMethod::<Target>::new(
            LifecycleKind::ArgumentsOmitted,
            "usage",
            |target: &mut Target| target.calls += 1,
        );

        let mut target = Target::default();
        method.invoke(&mut target);
        method.invoke(&mut target);
        assert_eq!(target.calls, 2);
        assert_eq!(method.kind(), LifecycleKind::ArgumentsOmitted);
    }
}
