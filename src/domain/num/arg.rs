//! Dynamic argument values passed to contract methods

use alloy_primitives::U256;

use super::BigNumberish;

/// A positional contract argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Any numeric-like value
    Number(BigNumberish),
    Bool(bool),
    /// Text of unknown representation, coerced as hex or whole number
    Text(String),
    /// Array argument (`felt*`)
    List(Vec<ArgValue>),
}

impl From<BigNumberish> for ArgValue {
    fn from(value: BigNumberish) -> Self {
        ArgValue::Number(value)
    }
}

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        ArgValue::Number(BigNumberish::Native(value))
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        ArgValue::Number(BigNumberish::Native(value.into()))
    }
}

impl From<U256> for ArgValue {
    fn from(value: U256) -> Self {
        ArgValue::Number(BigNumberish::Big(value))
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Text(value)
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(values: Vec<T>) -> Self {
        ArgValue::List(values.into_iter().map(Into::into).collect())
    }
}
