//! Prints the Pedersen generator encodings as byte-array literals.

use clap::Parser;
use ed25519_generators::{
    BigUint, FieldParams, GeneratorConfig, Result, derive_generators, parse_hex,
};
use std::fmt::Write;
use tracing_subscriber::EnvFilter;

/// Derive Ed25519 generator encodings for use as source constants.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Extra y-coordinate to derive after G and H (big-endian hex, repeatable)
    #[arg(long = "y", value_name = "HEX", value_parser = parse_hex)]
    extra: Vec<BigUint>,

    /// Also print the little-endian x-coordinate of each generator
    #[arg(long)]
    show_x: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let params = FieldParams::new();

    let mut config = GeneratorConfig::pedersen(&params)?;
    for (i, y) in args.extra.into_iter().enumerate() {
        config.push(format!("y[{i}]"), y);
    }

    for (i, generator) in derive_generators(&params, &config)?.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("base {}:", generator.label);
        println!("{}", byte_literal(generator.compressed.as_bytes()));
        if args.show_x {
            println!("x:");
            println!("{}", byte_literal(&generator.x_bytes));
        }
    }

    Ok(())
}

/// Render bytes as `0x58, 0x66, ...`.
fn byte_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 6);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "0x{b:02x}");
    }
    out
}
