use std::num::ParseFloatError;

use thiserror::Error;

/// Broad category of a [`ParseComplexError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No input was given at all.
    Argument,
    /// Input was given but is not of the form `<R;I>`.
    Format,
}

/// An error that can occur when parsing a [`Complex`](crate::Complex) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseComplexError {
    #[error("cannot parse a complex number from empty input")]
    Empty,

    #[error("complex number must start with `<`")]
    MissingOpen,

    #[error("complex number must end with `>`")]
    MissingClose,

    #[error("complex number must separate its components with `;`")]
    MissingSeparator,

    #[error("invalid real component: {0}")]
    InvalidReal(#[source] ParseFloatError),

    #[error("invalid imaginary component: {0}")]
    InvalidImaginary(#[source] ParseFloatError),
}

impl ParseComplexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseComplexError::Empty => ErrorKind::Argument,
            _ => ErrorKind::Format,
        }
    }
}
