//! Conversions between numeric-like representations

use alloy_primitives::U256;

use super::{ArgValue, BigNumberish};
use crate::error::{Error, Result};

/// Digits of a storage key after the prefix
const STORAGE_KEY_DIGITS: usize = 64;

/// Bits available to a storage key (`0x0` + `[0-7]` + 62 digits)
const STORAGE_KEY_BITS: usize = 251;

/// Test if a string is `0x`-prefixed hex. An empty body is accepted.
pub fn is_hex(hex: &str) -> bool {
    match strip_prefix(hex) {
        Some(body) => body.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Test if a string is one or more decimal digits
pub fn is_string_whole_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Parse any supported representation into a 256-bit integer
pub fn to_big_int(value: impl Into<BigNumberish>) -> Result<U256> {
    match value.into() {
        BigNumberish::Native(n) => Ok(U256::from(n)),
        BigNumberish::Big(n) => Ok(n),
        BigNumberish::Decimal(s) => parse_decimal(&s),
        BigNumberish::Hex(s) => match strip_prefix(&s) {
            Some(body) if is_hex(&s) => parse_hex_digits(body, &s),
            _ => Err(Error::hex_or_whole_number(s)),
        },
    }
}

/// Canonical lowercase hex with minimal digits (`0x0` for zero)
pub fn to_hex(value: impl Into<BigNumberish>) -> Result<String> {
    Ok(format!("0x{:x}", to_big_int(value)?))
}

/// Alias of [`to_hex`]
pub fn to_hex_string(value: impl Into<BigNumberish>) -> Result<String> {
    to_hex(value)
}

/// Hex left-padded to 64 digits.
///
/// Does not check that the value fits in a storage slot; see
/// [`to_storage_key_checked`] for the strict variant.
pub fn to_storage_key(value: impl Into<BigNumberish>) -> Result<String> {
    let digits = format!("{:x}", to_big_int(value)?);
    Ok(format!("0x{:0>width$}", digits, width = STORAGE_KEY_DIGITS))
}

/// Like [`to_storage_key`], but fails unless the value matches
/// `^0x0[0-7][0-9a-f]{62}$` once padded.
pub fn to_storage_key_checked(value: impl Into<BigNumberish>) -> Result<String> {
    let n = to_big_int(value)?;
    if n.bit_len() > STORAGE_KEY_BITS {
        return Err(Error::Range(format!(
            "0x{:x} exceeds the {}-bit storage key range",
            n, STORAGE_KEY_BITS
        )));
    }
    to_storage_key(n)
}

/// Render hex (prefix optional) as a decimal string
pub fn hex_to_decimal_string(hex: &str) -> Result<String> {
    let body = strip_prefix(hex).unwrap_or(hex);
    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::hex_string(hex));
    }
    Ok(parse_hex_digits(body, hex)?.to_string())
}

/// Lowercase and drop the zeros right after the prefix: `0x01A` -> `0x1a`.
///
/// An all-zero body keeps a single digit (`0x000` -> `0x0`).
pub fn clean_hex(hex: &str) -> String {
    let lower = hex.to_lowercase();
    match lower.strip_prefix("0x") {
        Some(body) => {
            let trimmed = body.trim_start_matches('0');
            if trimmed.is_empty() && !body.is_empty() {
                "0x0".to_string()
            } else {
                format!("0x{}", trimmed)
            }
        }
        None => lower,
    }
}

/// Fail unless `lower <= input <= upper`.
///
/// The message reads `Message not signable, invalid <name> length.` and is
/// matched on by signing code, so keep the wording stable.
pub fn assert_in_range(
    input: impl Into<BigNumberish>,
    lower: impl Into<BigNumberish>,
    upper: impl Into<BigNumberish>,
    name: &str,
) -> Result<()> {
    let input = to_big_int(input)?;
    let lower = to_big_int(lower)?;
    let upper = to_big_int(upper)?;

    if input >= lower && input <= upper {
        return Ok(());
    }

    let suffix = if name.is_empty() {
        "invalid length".to_string()
    } else {
        format!("invalid {} length", name)
    };
    Err(Error::Range(format!("Message not signable, {}.", suffix)))
}

pub fn big_numberish_array_to_decimal_string_array(values: &[BigNumberish]) -> Result<Vec<String>> {
    values
        .iter()
        .map(|value| to_big_int(value).map(|n| n.to_string()))
        .collect()
}

pub fn big_numberish_array_to_hexadecimal_string_array(
    values: &[BigNumberish],
) -> Result<Vec<String>> {
    values.iter().map(|value| to_hex(value)).collect()
}

/// Accept hex or whole-number input and return it as decimal
pub fn get_decimal_string(value: &str) -> Result<String> {
    if is_hex(value) {
        return hex_to_decimal_string(value);
    }
    if is_string_whole_number(value) {
        return Ok(value.to_string());
    }
    Err(Error::hex_or_whole_number(value))
}

/// Accept hex or whole-number input and return it as hex.
///
/// Hex input is returned as given.
pub fn get_hex_string(value: &str) -> Result<String> {
    if is_hex(value) {
        return Ok(value.to_string());
    }
    if is_string_whole_number(value) {
        return to_hex(BigNumberish::Decimal(value.to_string()));
    }
    Err(Error::hex_or_whole_number(value))
}

pub fn get_hex_string_array(values: &[String]) -> Result<Vec<String>> {
    values.iter().map(|value| get_hex_string(value)).collect()
}

/// On-chain boolean encoding
pub fn to_cairo_bool(value: bool) -> String {
    let bit = if value { "1" } else { "0" };
    bit.to_string()
}

/// Decode hex into bytes, left-padding an odd digit count with one zero
pub fn hex_to_bytes(value: &str) -> Result<Vec<u8>> {
    let body = match strip_prefix(value) {
        Some(body) if is_hex(value) => body,
        _ => return Err(Error::hex_string(value)),
    };

    let padded = if body.len() % 2 != 0 {
        format!("0{}", body)
    } else {
        body.to_string()
    };
    hex::decode(padded).map_err(|_| Error::hex_string(value))
}

/// `value + trunc(value * percent / 100)`
///
/// A negative percent lowers the value; the result must stay within
/// `0..=U256::MAX`.
pub fn add_percent(value: impl Into<BigNumberish>, percent: i64) -> Result<U256> {
    let value = to_big_int(value)?;
    let hundred = U256::from(100u64);
    let factor = U256::from(percent.unsigned_abs());

    // v = 100q + r, so v * p / 100 = q * p + r * p / 100 without a wide product
    let delta = (value / hundred)
        .checked_mul(factor)
        .and_then(|whole| {
            let rest = (value % hundred).checked_mul(factor)? / hundred;
            whole.checked_add(rest)
        })
        .ok_or_else(|| Error::Overflow(format!("{} * {}%", value, percent)))?;

    let adjusted = if percent >= 0 {
        value.checked_add(delta)
    } else {
        value.checked_sub(delta)
    };
    adjusted.ok_or_else(|| {
        Error::Range(format!("{} adjusted by {}% is out of range", value, percent))
    })
}

/// True for a native integer argument
pub fn is_number(value: &ArgValue) -> bool {
    matches!(value, ArgValue::Number(BigNumberish::Native(_)))
}

/// True for a 256-bit integer argument
pub fn is_big_int(value: &ArgValue) -> bool {
    matches!(value, ArgValue::Number(BigNumberish::Big(_)))
}

pub fn is_boolean(value: &ArgValue) -> bool {
    matches!(value, ArgValue::Bool(_))
}

fn strip_prefix(value: &str) -> Option<&str> {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
}

fn parse_decimal(value: &str) -> Result<U256> {
    if !is_string_whole_number(value) {
        return Err(Error::hex_or_whole_number(value));
    }
    U256::from_str_radix(value, 10).map_err(|_| Error::Overflow(value.to_string()))
}

/// Parse validated hex digits; `original` is used in the error
fn parse_hex_digits(body: &str, original: &str) -> Result<U256> {
    if body.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(body, 16).map_err(|_| Error::Overflow(original.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex() {
        assert!(is_hex("0x2fd23d9182193775423497fc0c472e156c57c69e4089a1967fb288a2d84e914"));
        assert!(is_hex("0xABCdef"));
        assert!(is_hex("0x"));
        assert!(!is_hex("2fd23d9182193775423497fc0c472e156c57c69e4089a1967fb288a2d84e914"));
        assert!(!is_hex("0xg1"));
        assert!(!is_hex(""));
        assert!(!is_hex("0x 1"));
    }

    #[test]
    fn test_to_big_int() {
        assert_eq!(to_big_int(26u64).unwrap(), U256::from(26u64));
        assert_eq!(to_big_int("26").unwrap(), U256::from(26u64));
        assert_eq!(to_big_int("0x1A").unwrap(), U256::from(26u64));
        assert_eq!(to_big_int("0x").unwrap(), U256::ZERO);
        assert!(matches!(to_big_int("Hello"), Err(Error::Format { .. })));
        assert!(matches!(to_big_int("-1"), Err(Error::Format { .. })));
        assert!(matches!(to_big_int("0xzz"), Err(Error::Format { .. })));
        assert!(matches!(to_big_int(""), Err(Error::Format { .. })));
    }

    #[test]
    fn test_to_big_int_overflow() {
        let too_big = format!("0x1{}", "0".repeat(64));
        assert!(matches!(to_big_int(too_big.as_str()), Err(Error::Overflow(_))));

        let max = format!("0x{}", "f".repeat(64));
        assert_eq!(to_big_int(max.as_str()).unwrap(), U256::MAX);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(0u64).unwrap(), "0x0");
        assert_eq!(to_hex(255u64).unwrap(), "0xff");
        assert_eq!(to_hex("0x00FF").unwrap(), "0xff");
        assert_eq!(to_hex_string("123").unwrap(), "0x7b");
    }

    #[test]
    fn test_to_storage_key() {
        let key = to_storage_key(1u64).unwrap();
        assert_eq!(key.len(), 66);
        assert_eq!(key, format!("0x{}1", "0".repeat(63)));

        let wide = to_storage_key(U256::MAX).unwrap();
        assert_eq!(wide, format!("0x{}", "f".repeat(64)));
    }

    #[test]
    fn test_to_storage_key_checked() {
        let max = (U256::from(1u64) << 251usize) - U256::from(1u64);
        let key = to_storage_key_checked(max).unwrap();
        assert!(key.starts_with("0x07ff"));

        let over = U256::from(1u64) << 251usize;
        assert!(matches!(to_storage_key_checked(over), Err(Error::Range(_))));
        // the loose variant still pads it
        assert_eq!(to_storage_key(over).unwrap().len(), 66);
    }

    #[test]
    fn test_hex_to_decimal_string() {
        assert_eq!(hex_to_decimal_string("0x1a").unwrap(), "26");
        assert_eq!(hex_to_decimal_string("1a").unwrap(), "26");
        assert_eq!(hex_to_decimal_string("0X1A").unwrap(), "26");
        assert!(hex_to_decimal_string("0xnope").is_err());
    }

    #[test]
    fn test_clean_hex() {
        assert_eq!(clean_hex("0x00A1"), "0xa1");
        assert_eq!(clean_hex("0x01A0"), "0x1a0");
        assert_eq!(clean_hex("0x0000"), "0x0");
        assert_eq!(clean_hex("0x"), "0x");
        assert_eq!(clean_hex("00A1"), "00a1");
    }

    #[test]
    fn test_assert_in_range() {
        assert!(assert_in_range(10u64, 5u64, 20u64, "value").is_ok());
        assert!(assert_in_range(5u64, 5u64, 20u64, "value").is_ok());
        assert!(assert_in_range(20u64, 5u64, 20u64, "value").is_ok());

        let err = assert_in_range(25u64, 5u64, 20u64, "value").unwrap_err();
        assert_eq!(err.to_string(), "Message not signable, invalid value length.");

        let err = assert_in_range("0x1", 5u64, 20u64, "").unwrap_err();
        assert_eq!(err.to_string(), "Message not signable, invalid length.");
    }

    #[test]
    fn test_array_conversions() {
        let values = vec![
            BigNumberish::from(26u64),
            BigNumberish::from("0x1b"),
            BigNumberish::from("28"),
        ];
        assert_eq!(
            big_numberish_array_to_decimal_string_array(&values).unwrap(),
            vec!["26", "27", "28"]
        );
        assert_eq!(
            big_numberish_array_to_hexadecimal_string_array(&values).unwrap(),
            vec!["0x1a", "0x1b", "0x1c"]
        );

        let bad = vec![BigNumberish::from(1u64), BigNumberish::from("abc")];
        assert!(big_numberish_array_to_decimal_string_array(&bad).is_err());
    }

    #[test]
    fn test_is_string_whole_number() {
        assert!(is_string_whole_number("0"));
        assert!(is_string_whole_number("007"));
        assert!(!is_string_whole_number(""));
        assert!(!is_string_whole_number("-1"));
        assert!(!is_string_whole_number("1.5"));
    }

    #[test]
    fn test_get_decimal_string() {
        assert_eq!(get_decimal_string("0x1a").unwrap(), "26");
        assert_eq!(get_decimal_string("123").unwrap(), "123");

        let err = get_decimal_string("Hello").unwrap_err();
        assert!(matches!(&err, Error::Format { value, .. } if value == "Hello"));
        assert_eq!(err.to_string(), "Hello need to be hex-string or whole-number-string");
    }

    #[test]
    fn test_get_hex_string() {
        assert_eq!(get_hex_string("123").unwrap(), "0x7b");
        assert_eq!(get_hex_string("0xAB").unwrap(), "0xAB");
        assert!(get_hex_string("Hello").is_err());

        let list = vec!["1".to_string(), "0x2".to_string()];
        assert_eq!(get_hex_string_array(&list).unwrap(), vec!["0x1", "0x2"]);
    }

    #[test]
    fn test_to_cairo_bool() {
        assert_eq!(to_cairo_bool(true), "1");
        assert_eq!(to_cairo_bool(false), "0");
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("0xabc").unwrap(), vec![0x0a, 0xbc]);
        assert_eq!(hex_to_bytes("0x0abc").unwrap(), vec![0x0a, 0xbc]);
        assert_eq!(hex_to_bytes("0x").unwrap(), Vec::<u8>::new());

        let err = hex_to_bytes("not-hex").unwrap_err();
        assert_eq!(err.to_string(), "not-hex need to be a hex-string");
    }

    #[test]
    fn test_add_percent() {
        assert_eq!(add_percent(100u64, 50).unwrap(), U256::from(150u64));
        assert_eq!(add_percent(3u64, 50).unwrap(), U256::from(4u64));
        assert_eq!(add_percent(199u64, 1).unwrap(), U256::from(200u64));
        assert_eq!(add_percent(100u64, -25).unwrap(), U256::from(75u64));
        assert_eq!(add_percent(3u64, -50).unwrap(), U256::from(2u64));
        assert!(add_percent(10u64, -200).is_err());
        assert!(add_percent(U256::MAX, 1).is_err());
    }

    #[test]
    fn test_type_predicates() {
        assert!(is_number(&ArgValue::from(1u64)));
        assert!(!is_number(&ArgValue::from("1")));
        assert!(is_big_int(&ArgValue::from(U256::from(1u64))));
        assert!(is_boolean(&ArgValue::from(true)));
        assert!(!is_boolean(&ArgValue::from(1u64)));
    }
}
