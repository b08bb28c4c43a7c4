//! Fixed-width little-endian encoding of field elements.

use crate::{Error, Result};
use num_bigint::BigUint;

/// Size of an encoded field element in bytes.
pub const FIELD_BYTES: usize = 32;

/// Little-endian encoding of a field element.
pub type FieldBytes = [u8; FIELD_BYTES];

/// Encode `value` as exactly 32 bytes, least significant byte first.
///
/// Returns [`Error::WidthOverflow`] instead of truncating when `value` does not
/// fit in 256 bits. Reduced field elements always fit.
pub fn encode_le(value: &BigUint) -> Result<FieldBytes> {
    let digits = value.to_bytes_le();
    if digits.len() > FIELD_BYTES {
        return Err(Error::WidthOverflow);
    }

    let mut bytes = [0u8; FIELD_BYTES];
    bytes[..digits.len()].copy_from_slice(&digits);
    Ok(bytes)
}

/// Decode 32 little-endian bytes into an integer.
///
/// No reduction is applied; the result may exceed the field modulus.
pub fn decode_le(bytes: &FieldBytes) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Parse a big-endian hexadecimal literal, with or without a `0x` prefix.
pub fn parse_hex(literal: &str) -> Result<BigUint> {
    let digits = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
        .unwrap_or(literal);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex);
    }

    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or(Error::InvalidHex)
}
