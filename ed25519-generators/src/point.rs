//! Recovery of Edwards curve points from their y-coordinate.
//!
//! The curve is the twisted Edwards form of Curve25519:
//!
//! ```text
//! -x^2 + y^2 = 1 + d * x^2 * y^2   (mod q)
//! ```

use crate::{
    Error, Result,
    encoding::{FIELD_BYTES, FieldBytes, decode_le, encode_le},
    field::FieldParams,
};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Recover an x-coordinate matching `y`, without checking the result.
///
/// Computes `x^2 = (y^2 - 1) / (d*y^2 + 1)`, takes the candidate root
/// `x = (x^2)^((q+3)/8)`, multiplies it by `sqrt(-1)` when its square is off,
/// and returns the even one of `{x, q - x}`.
///
/// When no point with this `y` exists the returned value does not satisfy the
/// curve equation. Use [`recover_point`] unless `y` is already known to be valid.
pub fn xrecover(params: &FieldParams, y: &BigUint) -> BigUint {
    let yy = params.square(y);
    let numerator = params.sub(&yy, &BigUint::one());
    let denominator = params.add(&params.mul(params.edwards_d(), &yy), &BigUint::one());
    let xx = params.mul(&numerator, &params.inverse(&denominator));

    let mut x = params.pow(&xx, params.sqrt_exponent());
    if params.square(&x) != xx {
        tracing::trace!("square root candidate corrected by sqrt(-1)");
        x = params.mul(&x, params.sqrt_m1());
    }

    if x.is_odd() {
        x = params.modulus() - &x;
    }
    x
}

/// Recover the point with the given `y` and the even x-coordinate.
///
/// Returns [`Error::NonCanonical`] if `y >= q` and [`Error::NotOnCurve`] if no
/// point on the curve has this y-coordinate.
pub fn recover_point(params: &FieldParams, y: &BigUint) -> Result<AffinePoint> {
    if !params.is_canonical(y) {
        return Err(Error::NonCanonical);
    }

    let point = AffinePoint {
        x: xrecover(params, y),
        y: y.clone(),
    };

    if !point.is_on_curve(params) {
        tracing::debug!(%y, "y-coordinate has no matching x-coordinate");
        return Err(Error::NotOnCurve);
    }

    Ok(point)
}

/// Affine point on the twisted Edwards curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    x: BigUint,
    y: BigUint,
}

impl AffinePoint {
    /// The x-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// The y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Check if this point is on the curve.
    pub fn is_on_curve(&self, params: &FieldParams) -> bool {
        // -X^2 + Y^2 == 1 + D * X^2 * Y^2

        let xx = params.square(&self.x);
        let yy = params.square(&self.y);
        let lhs = params.sub(&yy, &xx);
        let rhs = params.add(
            &BigUint::one(),
            &params.mul(params.edwards_d(), &params.mul(&xx, &yy)),
        );

        lhs == rhs
    }

    /// Little-endian encoding of the x-coordinate.
    pub fn x_bytes(&self) -> Result<FieldBytes> {
        encode_le(&self.x)
    }

    /// Standard compression; store Y and the parity of X.
    pub fn compress(&self) -> Result<CompressedEdwardsY> {
        let mut bytes = encode_le(&self.y)?;
        if bytes[FIELD_BYTES - 1] & 0x80 != 0 {
            return Err(Error::NonCanonical);
        }

        bytes[FIELD_BYTES - 1] |= u8::from(self.x.is_odd()) << 7;
        Ok(CompressedEdwardsY(bytes))
    }
}

/// Compressed point: little-endian y-coordinate with the parity of x in the
/// top bit of the last byte.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CompressedEdwardsY(pub FieldBytes);

impl CompressedEdwardsY {
    /// Attempt to decompress to an [`AffinePoint`].
    ///
    /// Returns an error:
    /// - if the encoded y-coordinate is not below the modulus.
    /// - if no curve point has this y-coordinate.
    /// - if the sign bit is set but the only matching x-coordinate is zero.
    pub fn decompress(&self, params: &FieldParams) -> Result<AffinePoint> {
        let mut y_bytes = self.0;
        let sign = y_bytes[FIELD_BYTES - 1] >> 7;
        y_bytes[FIELD_BYTES - 1] &= 0x7f;

        let mut point = recover_point(params, &decode_le(&y_bytes))?;
        if sign == 1 {
            if point.x.is_zero() {
                return Err(Error::NotOnCurve);
            }
            point.x = params.neg(&point.x);
        }

        Ok(point)
    }

    /// View this `CompressedEdwardsY` as an array of bytes.
    pub const fn as_bytes(&self) -> &FieldBytes {
        &self.0
    }

    /// Copy this `CompressedEdwardsY` to an array of bytes.
    pub const fn to_bytes(&self) -> FieldBytes {
        self.0
    }
}

impl AsRef<[u8]> for CompressedEdwardsY {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
