//! Error types.

use core::fmt::{self, Display};

/// Errors raised by the checked recovery and encoding operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The supplied y-coordinate has no matching x-coordinate on the curve.
    NotOnCurve,

    /// A value expected to be a field element is not below the modulus.
    NonCanonical,

    /// A value does not fit in the fixed 32-byte encoding width.
    WidthOverflow,

    /// A hexadecimal literal could not be parsed.
    InvalidHex,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::NotOnCurve => "no curve point has the given y-coordinate",
            Error::NonCanonical => "value is not a canonical field element",
            Error::WidthOverflow => "value does not fit in 32 bytes",
            Error::InvalidHex => "malformed hexadecimal literal",
        })
    }
}

impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
