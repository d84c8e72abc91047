//! Marker schema attached to the members of a target type.

use std::fmt;

/// Describes how raw tokens populate one marked property.
///
/// A marker may combine several criteria. A property with both a key and a
/// position accepts either `--name value` or a bare positional token.
///
/// Markers are normally produced by `#[derive(Arguments)]` from
/// `#[arg(...)]` field attributes:
///
/// ```rust,ignore
/// #[derive(Default, Arguments)]
/// struct Opts {
///     #[arg(switch = "/?", switch = "--help")]
///     help: bool,
///
///     #[arg(key = "--name", key = "-n", position = 0)]
///     name: Option<String>,
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArgMarker {
    /// Exact tokens whose presence sets the property (e.g. `"/?"`, `"-v"`).
    pub switches: &'static [&'static str],

    /// Keys introducing a value as `key value`, `key=value` or `key:value`.
    pub keys: &'static [&'static str],

    /// Index among the positional tokens.
    pub position: Option<usize>,

    /// Whether the positional slot also swallows every later positional token.
    pub trailing: bool,

    /// Whether an unmatched property is reported as missing.
    pub required: bool,

    /// Human-readable description, taken from `help = "..."` or doc comments.
    pub description: Option<&'static str>,
}

impl ArgMarker {
    /// Creates an empty marker.
    pub const fn new() -> Self {
        Self {
            switches: &[],
            keys: &[],
            position: None,
            trailing: false,
            required: false,
            description: None,
        }
    }

    /// Sets the switch tokens.
    pub const fn with_switches(mut self, switches: &'static [&'static str]) -> Self {
        self.switches = switches;
        self
    }

    /// Sets the value keys.
    pub const fn with_keys(mut self, keys: &'static [&'static str]) -> Self {
        self.keys = keys;
        self
    }

    /// Sets the positional index.
    pub const fn with_position(mut self, index: usize) -> Self {
        self.position = Some(index);
        self
    }

    /// Makes the positional slot swallow the remaining positional tokens.
    pub const fn trailing(mut self) -> Self {
        self.trailing = true;
        self
    }

    /// Marks the property as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the description.
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Returns `true` if no criterion is declared at all.
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty() && self.keys.is_empty() && self.position.is_none()
    }

    /// A short label for diagnostics: the first switch, the first key, or `<#n>`.
    pub fn label(&self) -> String {
        if let Some(switch) = self.switches.first() {
            (*switch).to_string()
        } else if let Some(key) = self.keys.first() {
            (*key).to_string()
        } else if let Some(position) = self.position {
            format!("<#{position}>")
        } else {
            "<unmarked>".to_string()
        }
    }
}

/// Lifecycle points at which a single marked handler method may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleKind {
    /// The raw argument array was empty.
    ArgumentsOmitted,
    /// Binding finished with failures or missing required properties.
    ArgumentError,
    /// Binding finished cleanly.
    ArgumentsBound,
}

impl LifecycleKind {
    /// Every lifecycle kind, in dispatch-table order.
    pub const ALL: [LifecycleKind; 3] = [
        LifecycleKind::ArgumentsOmitted,
        LifecycleKind::ArgumentError,
        LifecycleKind::ArgumentsBound,
    ];

    /// Returns the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArgumentsOmitted => "arguments_omitted",
            Self::ArgumentError => "argument_error",
            Self::ArgumentsBound => "arguments_bound",
        }
    }

    /// Returns the method attribute that marks a handler of this kind.
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::ArgumentsOmitted => "on_omitted",
            Self::ArgumentError => "on_error",
            Self::ArgumentsBound => "on_bound",
        }
    }
}

impl fmt::Display for LifecycleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
