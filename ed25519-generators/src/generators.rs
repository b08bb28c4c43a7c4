//! Pedersen commitment generators and their derived encodings.

use crate::{
    Result,
    encoding::{FieldBytes, parse_hex},
    field::FieldParams,
    point::{AffinePoint, CompressedEdwardsY, recover_point},
};
use num_bigint::BigUint;

/// y-coordinate of the second Pedersen generator `H`, big-endian hex.
pub const BASE_H_Y: &str = "164af560f4bbc72c8761f6db325864e696c4c86e2c7e1e4fcbded121624f9edd";

/// y-coordinate of the standard base point `G`: `4/5 mod q`.
pub fn base_g_y(params: &FieldParams) -> BigUint {
    params.mul(&BigUint::from(4u32), &params.inverse(&BigUint::from(5u32)))
}

/// y-coordinate of the second generator `H`.
pub fn base_h_y() -> Result<BigUint> {
    parse_hex(BASE_H_Y)
}

/// A labelled y-coordinate to derive a generator from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Generator {
    /// Name printed alongside the derived bytes.
    pub label: String,

    /// The generator's y-coordinate.
    pub y: BigUint,
}

/// Ordered set of generators to derive.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GeneratorConfig {
    generators: Vec<Generator>,
}

impl GeneratorConfig {
    /// Empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Pedersen pair: `G` followed by `H`.
    pub fn pedersen(params: &FieldParams) -> Result<Self> {
        let mut config = Self::new();
        config.push("G", base_g_y(params));
        config.push("H", base_h_y()?);
        Ok(config)
    }

    /// Append a generator.
    pub fn push(&mut self, label: impl Into<String>, y: BigUint) {
        self.generators.push(Generator {
            label: label.into(),
            y,
        });
    }

    /// Configured generators, in order.
    pub fn generators(&self) -> &[Generator] {
        &self.generators
    }
}

/// A generator whose point has been recovered and encoded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DerivedGenerator {
    /// Label copied from the [`Generator`].
    pub label: String,

    /// The recovered point.
    pub point: AffinePoint,

    /// Standard point encoding; the constant to embed.
    pub compressed: CompressedEdwardsY,

    /// Little-endian x-coordinate.
    pub x_bytes: FieldBytes,
}

/// Recover and encode every configured generator.
///
/// Stops at the first generator whose y-coordinate is not a valid point.
pub fn derive_generators(
    params: &FieldParams,
    config: &GeneratorConfig,
) -> Result<Vec<DerivedGenerator>> {
    config
        .generators()
        .iter()
        .map(|generator| -> Result<DerivedGenerator> {
            let point = recover_point(params, &generator.y)?;
            tracing::debug!(label = %generator.label, x = %point.x(), "recovered generator");

            Ok(DerivedGenerator {
                label: generator.label.clone(),
                compressed: point.compress()?,
                x_bytes: point.x_bytes()?,
                point,
            })
        })
        .collect()
}
