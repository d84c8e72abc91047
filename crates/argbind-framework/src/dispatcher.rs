//! Lifecycle handler dispatch.
//!
//! The [`HandlerDispatcher`] discovers the handler methods of one
//! [`LifecycleKind`] on the target type and invokes at most one of them:
//!
//! 1. Absent or empty discovery result: nothing happens
//! 2. Exactly one handler: it is invoked against the target, once
//! 3. More than one: [`ConfigurationError::MultipleHandlers`]
//!
//! ```rust,ignore
//! use argbind_framework::HandlerDispatcher;
//!
//! let dispatcher = HandlerDispatcher::new(Arc::new(SchemaInspector));
//! let invoked = dispatcher.dispatch(&mut target, LifecycleKind::ArgumentsOmitted)?;
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use argbind_core::{ConfigurationError, Inspector, LifecycleKind};
use tracing::{Level, debug, span};

/// Invokes the single lifecycle handler of a kind, if one is declared.
pub struct HandlerDispatcher<T> {
    inspector: Arc<dyn Inspector<T>>,
}

impl<T> HandlerDispatcher<T> {
    /// Creates a dispatcher discovering handlers through `inspector`.
    pub fn new(inspector: Arc<dyn Inspector<T>>) -> Self {
        Self { inspector }
    }

    /// Dispatches `kind` against `target`.
    ///
    /// Returns the name of the invoked handler, or `None` when `T` declares
    /// no handler of that kind.
    pub fn dispatch(
        &self,
        target: &mut T,
        kind: LifecycleKind,
    ) -> Result<Option<&'static str>, ConfigurationError> {
        let span = span!(Level::DEBUG, "dispatch", kind = %kind);
        let _enter = span.enter();

        // Absent and empty are the same: no handler.
        let handlers = self.inspector.marked_methods(kind).unwrap_or_default();

        match handlers.as_slice() {
            [] => {
                debug!("No handler declared");
                Ok(None)
            }
            [handler] => {
                debug!(handler = handler.name(), "Invoking handler");
                handler.invoke(target);
                Ok(Some(handler.name()))
            }
            _ => Err(ConfigurationError::MultipleHandlers {
                type_name: type_name::<T>(),
                kind,
                count: handlers.len(),
            }),
        }
    }
}

impl<T> Clone for HandlerDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            inspector: Arc::clone(&self.inspector),
        }
    }
}

impl<T> fmt::Debug for HandlerDispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerDispatcher")
            .field("target", &type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argbind_core::{MarkedMethod, MarkedProperty};

    #[derive(Default)]
    struct Target {
        omitted: usize,
        errors: usize,
    }

    /// Returns a fixed handler table per call.
    enum Table {
        Absent,
        Empty,
        One,
        Many(usize),
    }

    impl Inspector<Target> for Table {
        fn marked_properties(&self) -> Vec<MarkedProperty<Target>> {
            Vec::new()
        }

        fn marked_methods(&self, kind: LifecycleKind) -> Option<Vec<MarkedMethod<Target>>> {
            let handler = MarkedMethod::<Target>::new(kind, "show_usage", |target| {
                target.omitted += 1
            });
            match self {
                Table::Absent => None,
                Table::Empty => Some(Vec::new()),
                Table::One => Some(vec![handler]),
                Table::Many(count) => Some(vec![handler; *count]),
            }
        }
    }

    fn dispatcher(table: Table) -> HandlerDispatcher<Target> {
        HandlerDispatcher::new(Arc::new(table))
    }

    #[test]
    fn test_absent_is_noop() {
        let mut target = Target::default();
        let result = dispatcher(Table::Absent).dispatch(&mut target, LifecycleKind::ArgumentsOmitted);

        assert_eq!(result, Ok(None));
        assert_eq!(target.omitted, 0);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut target = Target::default();
        let result = dispatcher(Table::Empty).dispatch(&mut target, LifecycleKind::ArgumentError);

        assert_eq!(result, Ok(None));
        assert_eq!(target.omitted, 0);
    }

    #[test]
    fn test_single_handler_invoked_once() {
        let mut target = Target::default();
        let result = dispatcher(Table::One).dispatch(&mut target, LifecycleKind::ArgumentsOmitted);

        assert_eq!(result, Ok(Some("show_usage")));
        assert_eq!(target.omitted, 1);
        assert_eq!(target.errors, 0);
    }

    #[test]
    fn test_multiple_handlers_fail_with_count() {
        let mut target = Target::default();
        let err = dispatcher(Table::Many(3))
            .dispatch(&mut target, LifecycleKind::ArgumentError)
            .unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::MultipleHandlers {
                type_name: type_name::<Target>(),
                kind: LifecycleKind::ArgumentError,
                count: 3,
            }
        );
        assert!(err.to_string().contains('3'));
        assert_eq!(target.omitted, 0);
    }

    #[test]
    fn test_dispatch_is_repeatable() {
        let mut target = Target::default();
        let dispatcher = dispatcher(Table::One);

        for _ in 0..3 {
            dispatcher
                .dispatch(&mut target, LifecycleKind::ArgumentsBound)
                .unwrap();
        }

        assert_eq!(target.omitted, 3);
    }
}
