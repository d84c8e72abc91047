//! Values handed from rules to property binders.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConversionError;

/// A value a rule extracted from the raw tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// One of the property's switches was present.
    Switch,
    /// A textual value (keyed or positional).
    Text(String),
}

impl ArgValue {
    /// Returns the text, if this is a textual value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Switch => None,
        }
    }
}

impl From<&str> for ArgValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Conversion from an [`ArgValue`] into a property type.
///
/// `assign` is what generated binders call. Its default replaces the current
/// value; collection types override it to accumulate instead.
pub trait FromArgument: Sized {
    /// Converts a single value.
    fn from_argument(value: ArgValue) -> Result<Self, ConversionError>;

    /// Stores `value` into an existing slot.
    fn assign(slot: &mut Self, value: ArgValue) -> Result<(), ConversionError> {
        *slot = Self::from_argument(value)?;
        Ok(())
    }
}

fn parse_text<T: FromStr>(value: ArgValue, expected: &'static str) -> Result<T, ConversionError> {
    match value {
        ArgValue::Text(text) => text
            .parse()
            .map_err(|_| ConversionError::invalid(text, expected)),
        ArgValue::Switch => Err(ConversionError::ValueRequired { expected }),
    }
}

impl FromArgument for bool {
    fn from_argument(value: ArgValue) -> Result<Self, ConversionError> {
        match value {
            ArgValue::Switch => Ok(true),
            ArgValue::Text(text) => match text.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => Ok(true),
                "false" | "no" | "0" | "off" => Ok(false),
                _ => Err(ConversionError::invalid(text, "a boolean")),
            },
        }
    }
}

impl FromArgument for String {
    fn from_argument(value: ArgValue) -> Result<Self, ConversionError> {
        match value {
            ArgValue::Text(text) => Ok(text),
            ArgValue::Switch => Err(ConversionError::ValueRequired { expected: "a string" }),
        }
    }
}

impl FromArgument for PathBuf {
    fn from_argument(value: ArgValue) -> Result<Self, ConversionError> {
        parse_text(value, "a path")
    }
}

impl FromArgument for char {
    fn from_argument(value: ArgValue) -> Result<Self, ConversionError> {
        parse_text(value, "a single character")
    }
}

macro_rules! impl_from_str_argument {
    ($expected:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl FromArgument for $ty {
                fn from_argument(value: ArgValue) -> Result<Self, ConversionError> {
                    parse_text(value, $expected)
                }
            }
        )+
    };
}

impl_from_str_argument!("an integer" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_from_str_argument!("a number" => f32, f64);

impl<T: FromArgument> FromArgument for Option<T> {
    fn from_argument(value: ArgValue) -> Result<Self, ConversionError> {
        T::from_argument(value).map(Some)
    }
}

impl<T: FromArgument> FromArgument for Vec<T> {
    fn from_argument(value: ArgValue) -> Result<Self, ConversionError> {
        Ok(vec![T::from_argument(value)?])
    }

    fn assign(slot: &mut Self, value: ArgValue) -> Result<(), ConversionError> {
        slot.push(T::from_argument(value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_from_switch_and_text() {
        assert_eq!(bool::from_argument(ArgValue::Switch), Ok(true));
        assert_eq!(bool::from_argument("off".into()), Ok(false));
        assert_eq!(bool::from_argument("YES".into()), Ok(true));
        assert!(bool::from_argument("maybe".into()).is_err());
    }

    #[test]
    fn test_integer_rejects_switch() {
        assert_eq!(
            u16::from_argument(ArgValue::Switch),
            Err(ConversionError::ValueRequired {
                expected: "an integer"
            })
        );
        assert_eq!(u16::from_argument("8080".into()), Ok(8080));
        assert_eq!(
            u16::from_argument("http".into()),
            Err(ConversionError::invalid("http", "an integer"))
        );
    }

    #[test]
    fn test_vec_accumulates() {
        let mut slot: Vec<String> = Vec::new();
        FromArgument::assign(&mut slot, "a".into()).unwrap();
        FromArgument::assign(&mut slot, "b".into()).unwrap();
        assert_eq!(slot, vec!["a", "b"]);
    }

    #[test]
    fn test_option_replaces() {
        let mut slot: Option<f64> = Some(1.0);
        FromArgument::assign(&mut slot, "2.5".into()).unwrap();
        assert_eq!(slot, Some(2.5));
    }
}
