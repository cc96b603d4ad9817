//! Utility module with iptcolor's errors.
//!
//! The color codec and editors are total functions, so the only fallible
//! operation is parsing a color from its string representation.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Like the rest of this crate's types, the variants carry no state, which
/// keeps them easy to expose to Python.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#` or
    /// `ipt`.
    #[error("color format should start with `#` or `ipt(` but doesn't")]
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    #[error("color format should contain only valid ASCII characters but doesn't")]
    UnexpectedCharacters,

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `ipt 0.5 0.5 0.5)` is missing the opening parenthesis.
    #[error("color format should include an opening parenthesis but doesn't")]
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `ipt(1 0.5 0.5` is missing the closing parenthesis.
    #[error("color format should include a closing parenthesis but doesn't")]
    NoClosingParenthesis,

    /// A color format that is missing a coordinate. For example, `ipt(1 0.5)`
    /// is missing the third coordinate and `ipt(1 0.5 0.5 /)` is missing alpha.
    #[error("color format should have three coordinates and optional alpha but is missing one")]
    MissingCoordinate,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    #[error("color format should have hexadecimal coordinates but has malformed one")]
    MalformedHex,

    /// A color format that has a malformed floating point number as
    /// coordinate. For example, `ipt(1 0..5 0.5)` has a malformed second
    /// coordinate.
    #[error("color format should have floating point coordinates but has malformed one")]
    MalformedFloat,

    /// A color format with more than three coordinates or more than one alpha.
    /// For example, `ipt(1 2 3 4)` has one coordinate too many.
    #[error("color format should have three coordinates and optional alpha but has more")]
    TooManyCoordinates,
}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    /// Convert a color format error to a Python value error.
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
