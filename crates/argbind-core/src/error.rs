//! Error types shared by the binder components.
//!
//! Configuration errors describe a broken schema on the target type and are
//! programmer mistakes. Bind errors describe tokens that could not be stored
//! into a property and come from user input.

use thiserror::Error;

use crate::marker::LifecycleKind;

// =============================================================================
// Configuration Errors
// =============================================================================

/// The declarative schema of a target type is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The type declares no bindable property.
    #[error("type '{type_name}' declares no marked properties")]
    NoMarkedProperties {
        /// The target type.
        type_name: &'static str,
    },

    /// The type declares more than one handler for a lifecycle kind.
    #[error(
        "type '{type_name}' declares {count} handlers for '{kind}', at most one is allowed"
    )]
    MultipleHandlers {
        /// The target type.
        type_name: &'static str,
        /// The lifecycle kind with too many handlers.
        kind: LifecycleKind,
        /// How many handlers were found.
        count: usize,
    },
}

// =============================================================================
// Conversion / Bind Errors
// =============================================================================

/// A token could not be converted into a property's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The text did not parse.
    #[error("expected {expected}, got '{value}'")]
    Invalid {
        /// The offending text.
        value: String,
        /// What the property accepts.
        expected: &'static str,
    },

    /// A switch was given but the property needs a value.
    #[error("expected {expected}, got a bare switch")]
    ValueRequired {
        /// What the property accepts.
        expected: &'static str,
    },
}

impl ConversionError {
    /// Creates an invalid-value error.
    pub fn invalid(value: impl Into<String>, expected: &'static str) -> Self {
        Self::Invalid {
            value: value.into(),
            expected,
        }
    }
}

/// A rule recognized a property's marker but could not bind it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The token did not convert into the property's type.
    #[error("invalid value for '{property}': {source}")]
    Conversion {
        /// The property name.
        property: &'static str,
        /// The underlying conversion failure.
        #[source]
        source: ConversionError,
    },

    /// A key was the last token, or was followed by another option.
    #[error("'{key}' expects a value for '{property}'")]
    MissingValue {
        /// The property name.
        property: &'static str,
        /// The key as it appeared on the command line.
        key: String,
    },

    /// Custom rule error.
    #[error("{0}")]
    Custom(String),
}

impl BindError {
    /// Creates a custom bind error.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Returns the property this error refers to, when known.
    pub fn property(&self) -> Option<&'static str> {
        match self {
            Self::Conversion { property, .. } | Self::MissingValue { property, .. } => {
                Some(property)
            }
            Self::Custom(_) => None,
        }
    }
}
