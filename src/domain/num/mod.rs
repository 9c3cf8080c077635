//! Numeric-like values and the conversions between their representations
//!
//! Every representation denotes a single non-negative integer. Decimal and
//! hex strings always round-trip through `U256`, so no conversion loses
//! precision; anything above 2^256 - 1 is rejected rather than wrapped.

mod arg;
mod convert;

use std::fmt;

use alloy_primitives::U256;

pub use arg::ArgValue;
pub use convert::{
    add_percent, assert_in_range, big_numberish_array_to_decimal_string_array,
    big_numberish_array_to_hexadecimal_string_array, clean_hex, get_decimal_string,
    get_hex_string, get_hex_string_array, hex_to_bytes, hex_to_decimal_string, is_big_int,
    is_boolean, is_hex, is_number, is_string_whole_number, to_big_int, to_cairo_bool, to_hex,
    to_hex_string, to_storage_key, to_storage_key_checked,
};

/// A value that can be read as a non-negative integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigNumberish {
    /// Native machine integer
    Native(u64),
    /// 256-bit integer
    Big(U256),
    /// Decimal digits, no sign, no separators
    Decimal(String),
    /// `0x`-prefixed hex digits
    Hex(String),
}

impl BigNumberish {
    /// Classify a string by its prefix. Validation happens on conversion.
    pub fn from_str_unchecked(value: &str) -> Self {
        if value.starts_with("0x") || value.starts_with("0X") {
            BigNumberish::Hex(value.to_string())
        } else {
            BigNumberish::Decimal(value.to_string())
        }
    }
}

impl fmt::Display for BigNumberish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigNumberish::Native(n) => write!(f, "{}", n),
            BigNumberish::Big(n) => write!(f, "{}", n),
            BigNumberish::Decimal(s) | BigNumberish::Hex(s) => f.write_str(s),
        }
    }
}

impl From<u64> for BigNumberish {
    fn from(value: u64) -> Self {
        BigNumberish::Native(value)
    }
}

impl From<u32> for BigNumberish {
    fn from(value: u32) -> Self {
        BigNumberish::Native(value.into())
    }
}

impl From<u128> for BigNumberish {
    fn from(value: u128) -> Self {
        BigNumberish::Big(U256::from(value))
    }
}

impl From<U256> for BigNumberish {
    fn from(value: U256) -> Self {
        BigNumberish::Big(value)
    }
}

impl From<&str> for BigNumberish {
    fn from(value: &str) -> Self {
        BigNumberish::from_str_unchecked(value)
    }
}

impl From<&BigNumberish> for BigNumberish {
    fn from(value: &BigNumberish) -> Self {
        value.clone()
    }
}

impl From<String> for BigNumberish {
    fn from(value: String) -> Self {
        BigNumberish::from_str_unchecked(&value)
    }
}
