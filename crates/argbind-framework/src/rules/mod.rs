//! Built-in matching rules.
//!
//! Each rule looks at one criterion of a property's marker and ignores the
//! others, so a property combining a key and a position is served by both
//! [`ValueRule`] and [`PositionalRule`].
//!
//! | Rule | Marker field | Recognizes |
//! |------|--------------|------------|
//! | [`SwitchRule`] | `switches` | an exact switch token anywhere, e.g. `/?` |
//! | [`ValueRule`] | `keys` | `key value`, `key=value`, `key:value`, every occurrence |
//! | [`PositionalRule`] | `position` | the n-th positional token (and the rest when `trailing`) |

mod positional;
mod switch;
mod value;

pub use positional::PositionalRule;
pub use switch::SwitchRule;
pub use value::ValueRule;

#[cfg(test)]
pub(crate) mod testing {
    //! A tiny recording slot shared by the rule tests.

    use argbind_core::{ArgMarker, ArgValue, BindError, ConversionError, PropertySlot};

    pub struct RecordingSlot {
        pub marker: ArgMarker,
        pub values: Vec<ArgValue>,
        pub reject: bool,
    }

    impl RecordingSlot {
        pub fn new(marker: ArgMarker) -> Self {
            Self {
                marker,
                values: Vec::new(),
                reject: false,
            }
        }

        pub fn texts(&self) -> Vec<&str> {
            self.values.iter().filter_map(ArgValue::as_text).collect()
        }
    }

    impl PropertySlot for RecordingSlot {
        fn name(&self) -> &'static str {
            "recorded"
        }

        fn marker(&self) -> &ArgMarker {
            &self.marker
        }

        fn bind(&mut self, value: ArgValue) -> Result<(), BindError> {
            if self.reject {
                return Err(BindError::Conversion {
                    property: "recorded",
                    source: ConversionError::invalid("x", "nothing"),
                });
            }
            self.values.push(value);
            Ok(())
        }
    }

    pub fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }
}
