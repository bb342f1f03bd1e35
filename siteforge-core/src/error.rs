//! Provides the [`Error`] type.

use std::fmt::Display;

/// Represents an error which can occur while rendering a document.
///
/// Malformed configuration values never produce an error; they degrade the feature they control instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The template identifier does not name one of the built-in templates.
    UnknownTemplate(String),
    /// A value could not be parsed into the enumerated type of the field.
    InvalidValue {
        /// The name of the field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A rendered document did not satisfy one of its invariants.
    Assertion(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownTemplate(id) => write!(f, "unknown template: {}", id),
            Error::InvalidValue { field, value } => {
                write!(f, "invalid value for `{}`: {}", field, value)
            }
            Error::Assertion(assertion) => write!(f, "assertion failed: {}", assertion),
        }
    }
}

impl std::error::Error for Error {}

/// Quietly asserts that the given condition is true.
///
/// If the condition is false, this macro will not panic, and will instead return an error.
#[macro_export]
macro_rules! quiet_assert {
    ($cond:expr) => {
        match $cond {
            true => Ok(()),
            false => Err($crate::error::Error::Assertion(
                stringify!($cond).to_string(),
            )),
        }
    };
}
