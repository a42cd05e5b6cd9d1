//! Hex to Decimal Conversion
//!
//! Converts hex-encoded BN254 field elements and scalars to decimal strings
//! for display. Values are 256-bit and larger, so parsing goes through
//! `BigUint` rather than any machine integer.

use num_bigint::{BigUint, ParseBigIntError};
use num_traits::Num;
use thiserror::Error;

/// Demo literals from the README: a G1 public key and a signing scalar.
pub const G1_X_HEX: &str = "0x2c1619993b1ae6dcb33661d64742b2b7336a90c3db7dfaba6eb691d98fea060a";
pub const G1_Y_HEX: &str = "0x0a16f975b962fecbe821b85c2d96093a9db1f2cf12b878a2376d99a16c4d9f06";
pub const SCALAR_HEX: &str = "0xffe3be6f94645e9216938adbaa5e621cd4afd69ffd75fb433498ca18866b248c";

/// Conversion error types
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid hex literal {0:?}: {1}")]
    InvalidHex(String, #[source] ParseBigIntError),
}

/// Convert a hex string to a decimal string.
///
/// A leading `0x` is stripped if present; the remainder must be non-empty
/// hex digits. Width is unbounded.
pub fn hex_to_decimal(hex_str: &str) -> Result<String, ConvertError> {
    let digits = hex_str.strip_prefix("0x").unwrap_or(hex_str);

    let value = BigUint::from_str_radix(digits, 16)
        .map_err(|e| ConvertError::InvalidHex(hex_str.to_string(), e))?;

    Ok(value.to_str_radix(10))
}

/// Print the three demo literals as hex/decimal pairs.
pub fn print_demo_conversions() -> Result<(), ConvertError> {
    let pairs = [("G1_X", G1_X_HEX), ("G1_Y", G1_Y_HEX), ("SCALAR", SCALAR_HEX)];

    for (i, (label, hex)) in pairs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} (hex): {}", label, hex);
        println!("{} (decimal): {}", label, hex_to_decimal(hex)?);
    }

    Ok(())
}
