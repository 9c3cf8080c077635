//! Felt calldata coder
//!
//! Every value is one or more field-element words. Arrays follow the
//! `<name>_len` / `<name>: T*` convention: the length parameter is not passed
//! by the caller, it is written from the array itself. `Uint256` is split
//! into its low and high 128-bit halves.

use alloy_primitives::U256;

use crate::domain::abi::{AbiCoder, CallResult, DecodedValue, FunctionAbi, ParamSpec};
use crate::domain::num::{get_decimal_string, to_big_int, to_cairo_bool, ArgValue, BigNumberish};
use crate::error::{Error, Result};

const UINT256_HALF_BITS: usize = 128;

/// Default coder for felt-based calldata
#[derive(Debug, Default, Clone, Copy)]
pub struct FeltAbiCoder;

impl FeltAbiCoder {
    pub fn new() -> Self {
        Self
    }
}

impl AbiCoder for FeltAbiCoder {
    fn encode_calldata(&self, function: &FunctionAbi, args: &[ArgValue]) -> Result<Vec<String>> {
        let params: Vec<&ParamSpec> = function
            .inputs
            .iter()
            .enumerate()
            .filter(|(idx, _)| !is_len_param(&function.inputs, *idx))
            .map(|(_, param)| param)
            .collect();

        if args.len() != params.len() {
            return Err(Error::Abi(format!(
                "{} expects {} arguments, got {}",
                function.name,
                params.len(),
                args.len()
            )));
        }

        let mut calldata = Vec::new();
        for (param, arg) in params.iter().zip(args) {
            encode_value(&param.name, &param.kind, arg, &mut calldata)?;
        }
        Ok(calldata)
    }

    fn decode_result(&self, function: &FunctionAbi, raw: &[String]) -> Result<CallResult> {
        let words = raw
            .iter()
            .map(|word| to_big_int(BigNumberish::from(word.as_str())))
            .collect::<Result<Vec<U256>>>()?;
        let mut cursor = Cursor {
            words: &words,
            pos: 0,
        };

        let mut result = CallResult::new();
        for (idx, param) in function.outputs.iter().enumerate() {
            // The array that follows reads its own length
            if is_len_param(&function.outputs, idx) {
                continue;
            }
            let value = decode_value(param, &mut cursor)?;
            result.push(param.name.clone(), value);
        }
        Ok(result)
    }
}

/// `x_len: felt` immediately followed by `x: T*`
fn is_len_param(params: &[ParamSpec], idx: usize) -> bool {
    let (Some(param), Some(next)) = (params.get(idx), params.get(idx + 1)) else {
        return false;
    };
    param.name.strip_suffix("_len") == Some(next.name.as_str()) && next.kind.ends_with('*')
}

fn encode_value(name: &str, kind: &str, arg: &ArgValue, out: &mut Vec<String>) -> Result<()> {
    if let Some(item_kind) = kind.strip_suffix('*') {
        let ArgValue::List(items) = arg else {
            return Err(Error::Abi(format!("'{}' expects an array", name)));
        };
        out.push(items.len().to_string());
        for item in items {
            encode_value(name, item_kind, item, out)?;
        }
        return Ok(());
    }

    match kind {
        "felt" | "core::felt252" => out.push(felt_word(name, arg)?),
        "Uint256" | "core::integer::u256" => {
            let value = to_big_int(felt_word(name, arg)?)?;
            let (low, high) = split_uint256(value);
            out.push(low.to_string());
            out.push(high.to_string());
        }
        other => {
            return Err(Error::Abi(format!(
                "unsupported type '{}' for '{}'",
                other, name
            )))
        }
    }
    Ok(())
}

/// Single word as a decimal string
fn felt_word(name: &str, arg: &ArgValue) -> Result<String> {
    match arg {
        ArgValue::Number(value) => Ok(to_big_int(value)?.to_string()),
        ArgValue::Bool(value) => Ok(to_cairo_bool(*value)),
        ArgValue::Text(value) => get_decimal_string(value),
        ArgValue::List(_) => Err(Error::Abi(format!(
            "'{}' expects a single value, got an array",
            name
        ))),
    }
}

fn split_uint256(value: U256) -> (U256, U256) {
    let mask = (U256::from(1u64) << UINT256_HALF_BITS) - U256::from(1u64);
    (value & mask, value >> UINT256_HALF_BITS)
}

struct Cursor<'a> {
    words: &'a [U256],
    pos: usize,
}

impl Cursor<'_> {
    fn take(&mut self, name: &str) -> Result<U256> {
        let word = self
            .words
            .get(self.pos)
            .copied()
            .ok_or_else(|| Error::Abi(format!("response too short for '{}'", name)))?;
        self.pos += 1;
        Ok(word)
    }

    fn remaining(&self) -> usize {
        self.words.len().saturating_sub(self.pos)
    }
}

fn decode_value(param: &ParamSpec, cursor: &mut Cursor<'_>) -> Result<DecodedValue> {
    match param.kind.as_str() {
        "felt" | "core::felt252" => Ok(DecodedValue::Felt(cursor.take(&param.name)?)),
        "Uint256" | "core::integer::u256" => {
            let low = cursor.take(&param.name)?;
            let high = cursor.take(&param.name)?;
            if low.bit_len() > UINT256_HALF_BITS || high.bit_len() > UINT256_HALF_BITS {
                return Err(Error::Abi(format!(
                    "'{}' has a Uint256 half wider than 128 bits",
                    param.name
                )));
            }
            Ok(DecodedValue::Uint256((high << UINT256_HALF_BITS) | low))
        }
        "felt*" | "core::felt252*" => {
            let len = cursor.take(&param.name)?;
            if len > U256::from(cursor.remaining()) {
                return Err(Error::Abi(format!(
                    "response too short for '{}' ({} items announced)",
                    param.name, len
                )));
            }
            let items = (0..len.to::<usize>())
                .map(|_| cursor.take(&param.name))
                .collect::<Result<Vec<_>>>()?;
            Ok(DecodedValue::Array(items))
        }
        other => Err(Error::Abi(format!(
            "unsupported type '{}' for '{}'",
            other, param.name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_function(inputs: Vec<ParamSpec>, outputs: Vec<ParamSpec>) -> FunctionAbi {
        FunctionAbi {
            name: "test".to_string(),
            inputs,
            outputs,
            state_mutability: None,
        }
    }

    #[test]
    fn test_encode_felts() {
        let function = make_function(
            vec![
                ParamSpec::new("a", "felt"),
                ParamSpec::new("b", "felt"),
                ParamSpec::new("c", "felt"),
                ParamSpec::new("d", "felt"),
            ],
            vec![],
        );
        let args = vec![
            ArgValue::from(7u64),
            ArgValue::from("0x1a"),
            ArgValue::from(true),
            ArgValue::from(BigNumberish::from("42")),
        ];

        let calldata = FeltAbiCoder.encode_calldata(&function, &args).unwrap();
        assert_eq!(calldata, vec!["7", "26", "1", "42"]);
    }

    #[test]
    fn test_encode_array_with_len() {
        let function = make_function(
            vec![
                ParamSpec::new("to", "felt"),
                ParamSpec::new("values_len", "felt"),
                ParamSpec::new("values", "felt*"),
            ],
            vec![],
        );
        let args = vec![ArgValue::from(1u64), ArgValue::from(vec![5u64, 6u64, 7u64])];

        let calldata = FeltAbiCoder.encode_calldata(&function, &args).unwrap();
        assert_eq!(calldata, vec!["1", "3", "5", "6", "7"]);
    }

    #[test]
    fn test_encode_uint256() {
        let function = make_function(vec![ParamSpec::new("amount", "Uint256")], vec![]);
        let value = (U256::from(3u64) << 128usize) + U256::from(5u64);

        let calldata = FeltAbiCoder
            .encode_calldata(&function, &[ArgValue::from(value)])
            .unwrap();
        assert_eq!(calldata, vec!["5", "3"]);
    }

    #[test]
    fn test_encode_errors() {
        let function = make_function(vec![ParamSpec::new("a", "felt")], vec![]);

        let err = FeltAbiCoder.encode_calldata(&function, &[]).unwrap_err();
        assert!(matches!(err, Error::Abi(_)));

        let err = FeltAbiCoder
            .encode_calldata(&function, &[ArgValue::from("Hello")])
            .unwrap_err();
        assert!(matches!(err, Error::Format { .. }));

        let function = make_function(vec![ParamSpec::new("a", "Point")], vec![]);
        let err = FeltAbiCoder
            .encode_calldata(&function, &[ArgValue::from(1u64)])
            .unwrap_err();
        assert!(err.to_string().contains("unsupported type"));
    }

    #[test]
    fn test_decode_outputs() {
        let function = make_function(
            vec![],
            vec![
                ParamSpec::new("balance", "Uint256"),
                ParamSpec::new("items_len", "felt"),
                ParamSpec::new("items", "felt*"),
                ParamSpec::new("flag", "felt"),
            ],
        );
        let raw: Vec<String> = ["0x5", "0x3", "0x2", "0xa", "0xb", "0x1"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let result = FeltAbiCoder.decode_result(&function, &raw).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(
            result["balance"],
            DecodedValue::Uint256((U256::from(3u64) << 128usize) + U256::from(5u64))
        );
        assert_eq!(
            result["items"],
            DecodedValue::Array(vec![U256::from(10u64), U256::from(11u64)])
        );
        assert_eq!(result[2], DecodedValue::Felt(U256::from(1u64)));
        assert!(result.get("items_len").is_none());
    }

    #[test]
    fn test_decode_short_response() {
        let function = make_function(
            vec![],
            vec![
                ParamSpec::new("items_len", "felt"),
                ParamSpec::new("items", "felt*"),
            ],
        );
        let raw = vec!["0x5".to_string(), "0x1".to_string()];

        let err = FeltAbiCoder.decode_result(&function, &raw).unwrap_err();
        assert!(err.to_string().contains("response too short"));
    }

    #[test]
    fn test_decode_malformed_word() {
        let function = make_function(vec![], vec![ParamSpec::new("a", "felt")]);
        let err = FeltAbiCoder
            .decode_result(&function, &["0xzz".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }
}
