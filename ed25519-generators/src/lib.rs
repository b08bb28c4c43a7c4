#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]

mod error;

pub mod encoding;
pub mod field;
pub mod generators;
pub mod point;

pub use crate::{
    encoding::{FIELD_BYTES, FieldBytes, decode_le, encode_le, parse_hex},
    error::{Error, Result},
    field::{FieldParams, expmod},
    generators::{DerivedGenerator, Generator, GeneratorConfig, derive_generators},
    point::{AffinePoint, CompressedEdwardsY, recover_point, xrecover},
};
pub use num_bigint::{self, BigUint};
