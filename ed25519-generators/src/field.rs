//! Arithmetic in the base field `GF(2^255 - 19)`.
//!
//! Field elements are plain [`BigUint`] values kept in canonical form, i.e. in
//! the range `[0, q)`. Every helper on [`FieldParams`] returns a reduced value
//! regardless of whether its inputs were reduced.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Numerator of the Edwards `d` constant: `d = -121665 / 121666`.
const EDWARDS_D_NUMERATOR: u32 = 121665;

/// Denominator of the Edwards `d` constant.
const EDWARDS_D_DENOMINATOR: u32 = 121666;

/// Low part of the prime subgroup order `l = 2^252 + ORDER_LOW`.
const ORDER_LOW: u128 = 27742317777372353535851937790883648493;

/// Compute `base^exponent mod modulus` by square-and-multiply.
///
/// The exponent is scanned from its most significant bit down, squaring the
/// accumulator at each step and multiplying in `base` for every set bit. The
/// accumulator is reduced after every multiplication, so intermediate values
/// never exceed `modulus^2`.
///
/// `base` does not need to be reduced. A zero exponent yields `1 mod modulus`.
///
/// # Panics
///
/// If `modulus` is zero.
pub fn expmod(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    let base = base % modulus;
    let mut acc = BigUint::one() % modulus;

    for i in (0..exponent.bits()).rev() {
        acc = &acc * &acc % modulus;
        if exponent.bit(i) {
            acc = acc * &base % modulus;
        }
    }

    acc
}

/// Divide `n` by `k`, asserting that the division is exact.
fn exact_div(n: &BigUint, k: u32) -> BigUint {
    let (quotient, remainder) = n.div_rem(&BigUint::from(k));
    assert!(remainder.is_zero(), "{n} is not divisible by {k}");
    quotient
}

/// Curve25519 field parameters and the constants derived from them.
///
/// Built once with [`FieldParams::new`] and passed by reference to every
/// recovery and encoding operation; nothing in it changes afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldParams {
    modulus: BigUint,
    order: BigUint,
    edwards_d: BigUint,
    sqrt_m1: BigUint,
    sqrt_exponent: BigUint,
    inverse_exponent: BigUint,
}

impl FieldParams {
    /// Derive the parameters for `q = 2^255 - 19`.
    ///
    /// ```text
    /// d = -121665 * 121666^(q-2)   mod q
    /// I = 2^((q-1)/4)              mod q
    /// ```
    ///
    /// # Panics
    ///
    /// If `q - 1` is not divisible by 4 or `q + 3` is not divisible by 8. Both
    /// hold for `2^255 - 19`, which is congruent to 5 modulo 8.
    pub fn new() -> Self {
        let modulus = (BigUint::one() << 255u32) - 19u32;
        let order = (BigUint::one() << 252u32) + BigUint::from(ORDER_LOW);

        let inverse_exponent = &modulus - 2u32;
        let sqrt_exponent = exact_div(&(&modulus + 3u32), 8);
        let sqrt_m1 = expmod(
            &BigUint::from(2u32),
            &exact_div(&(&modulus - 1u32), 4),
            &modulus,
        );

        let mut params = Self {
            modulus,
            order,
            edwards_d: BigUint::zero(),
            sqrt_m1,
            sqrt_exponent,
            inverse_exponent,
        };

        let denominator = params.inverse(&BigUint::from(EDWARDS_D_DENOMINATOR));
        params.edwards_d = params.mul(
            &params.neg(&BigUint::from(EDWARDS_D_NUMERATOR)),
            &denominator,
        );
        params
    }

    /// The field modulus `q = 2^255 - 19`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The prime subgroup order `l = 2^252 + 27742317777372353535851937790883648493`.
    ///
    /// Not used by point recovery; carried for consumers of the derived constants.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// The curve constant `d = -121665/121666`.
    pub fn edwards_d(&self) -> &BigUint {
        &self.edwards_d
    }

    /// `I = 2^((q-1)/4)`, a square root of `-1`.
    pub fn sqrt_m1(&self) -> &BigUint {
        &self.sqrt_m1
    }

    /// The exponent `(q+3)/8` used for the candidate square root.
    pub fn sqrt_exponent(&self) -> &BigUint {
        &self.sqrt_exponent
    }

    /// Whether `value` is already in `[0, q)`.
    pub fn is_canonical(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    /// Reduce `value` into `[0, q)`.
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// `a + b mod q`
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// `a - b mod q`
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) + &self.modulus - self.reduce(b)) % &self.modulus
    }

    /// `-a mod q`
    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// `a * b mod q`
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * b % &self.modulus
    }

    /// `a^2 mod q`
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// `base^exponent mod q`
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        expmod(base, exponent, &self.modulus)
    }

    /// Multiplicative inverse via Fermat's little theorem: `x^(q-2) mod q`.
    ///
    /// Zero has no inverse and maps to zero. Callers must not pass a value
    /// congruent to zero unless they treat the zero result as "undefined".
    pub fn inverse(&self, x: &BigUint) -> BigUint {
        self.pow(x, &self.inverse_exponent)
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldParams, expmod};
    use num_bigint::BigUint;
    use num_traits::{One, Zero};

    fn hex(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
    }

    #[test]
    fn modulus_literal() {
        let params = FieldParams::new();
        let expected = BigUint::parse_bytes(
            b"57896044618658097711785492504343953926634992332820282019728792003956564819949",
            10,
        )
        .unwrap();
        assert_eq!(params.modulus(), &expected);
    }

    #[test]
    fn order_literal() {
        let params = FieldParams::new();
        assert_eq!(
            params.order(),
            &hex("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed")
        );
    }

    #[test]
    fn edwards_d() {
        let params = FieldParams::new();
        assert_eq!(
            params.edwards_d(),
            &hex("52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3")
        );

        // d * 121666 == -121665
        let lhs = params.mul(params.edwards_d(), &BigUint::from(121666u32));
        assert_eq!(lhs, params.neg(&BigUint::from(121665u32)));
    }

    #[test]
    fn sqrt_m1() {
        let params = FieldParams::new();
        assert_eq!(
            params.sqrt_m1(),
            &hex("2b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b0")
        );
        assert_eq!(
            params.square(params.sqrt_m1()),
            params.neg(&BigUint::one())
        );
    }

    #[test]
    fn sqrt_exponent() {
        let params = FieldParams::new();
        let eight = BigUint::from(8u32);
        assert_eq!(
            params.sqrt_exponent() * &eight,
            params.modulus() + 3u32
        );
    }

    #[test]
    fn expmod_small() {
        let m = BigUint::from(7u32);
        assert_eq!(
            expmod(&BigUint::from(3u32), &BigUint::from(5u32), &m),
            BigUint::from(5u32)
        );
        assert_eq!(
            expmod(&BigUint::from(10u32), &BigUint::from(1u32), &m),
            BigUint::from(3u32)
        );
    }

    #[test]
    fn expmod_zero_exponent() {
        let e = BigUint::zero();
        let b = BigUint::from(12345u32);
        assert_eq!(expmod(&b, &e, &BigUint::from(7u32)), BigUint::one());
        assert_eq!(expmod(&b, &e, &BigUint::one()), BigUint::zero());
        assert_eq!(expmod(&BigUint::zero(), &e, &BigUint::from(7u32)), BigUint::one());
    }

    #[test]
    fn expmod_matches_modpow() {
        let params = FieldParams::new();
        let base = hex("164af560f4bbc72c8761f6db325864e696c4c86e2c7e1e4fcbded121624f9edd");
        let exponent = params.sqrt_exponent();
        assert_eq!(
            expmod(&base, exponent, params.modulus()),
            base.modpow(exponent, params.modulus())
        );
    }

    #[test]
    fn expmod_unreduced_base() {
        let params = FieldParams::new();
        let base = params.modulus() + 2u32;
        assert_eq!(
            params.pow(&base, &BigUint::from(10u32)),
            BigUint::from(1024u32)
        );
    }

    #[test]
    fn inverse() {
        let params = FieldParams::new();
        for v in [1u32, 2, 5, 121666, u32::MAX] {
            let v = BigUint::from(v);
            assert_eq!(params.mul(&v, &params.inverse(&v)), BigUint::one());
        }
    }

    #[test]
    fn inverse_of_zero_is_zero() {
        let params = FieldParams::new();
        assert!(params.inverse(&BigUint::zero()).is_zero());
        assert!(params.inverse(params.modulus()).is_zero());
    }

    #[test]
    fn sub_and_neg() {
        let params = FieldParams::new();
        let one = BigUint::one();
        let two = BigUint::from(2u32);
        assert_eq!(params.sub(&one, &two), params.modulus() - 1u32);
        assert_eq!(params.neg(&BigUint::zero()), BigUint::zero());
        assert_eq!(params.add(&params.neg(&two), &two), BigUint::zero());
    }

    #[test]
    fn canonical() {
        let params = FieldParams::new();
        assert!(params.is_canonical(&(params.modulus() - 1u32)));
        assert!(!params.is_canonical(params.modulus()));
    }
}
