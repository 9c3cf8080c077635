//! Decoded call results

use std::ops::Index;

use alloy_primitives::U256;
use serde::Serialize;

/// A decoded output value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DecodedValue {
    Felt(U256),
    /// Recombined from its low / high halves
    Uint256(U256),
    Array(Vec<U256>),
}

impl DecodedValue {
    /// Scalar value, `None` for arrays
    pub fn as_u256(&self) -> Option<U256> {
        match self {
            DecodedValue::Felt(n) | DecodedValue::Uint256(n) => Some(*n),
            DecodedValue::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&[U256]> {
        match self {
            DecodedValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Ordered outputs, addressable by position and by declared name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallResult {
    entries: Vec<(String, DecodedValue)>,
}

impl CallResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: DecodedValue) {
        self.entries.push((name.into(), value));
    }

    /// Look up an output by its declared name
    pub fn get(&self, name: &str) -> Option<&DecodedValue> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    pub fn get_index(&self, index: usize) -> Option<&DecodedValue> {
        self.entries.get(index).map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DecodedValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<usize> for CallResult {
    type Output = DecodedValue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index].1
    }
}

impl Index<&str> for CallResult {
    type Output = DecodedValue;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no output named '{}'", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_and_named_access() {
        let mut result = CallResult::new();
        result.push("low", DecodedValue::Felt(U256::from(1u64)));
        result.push("items", DecodedValue::Array(vec![U256::from(2u64)]));

        assert_eq!(result.len(), 2);
        assert_eq!(result[0], DecodedValue::Felt(U256::from(1u64)));
        assert_eq!(result["items"].as_array().unwrap(), &[U256::from(2u64)]);
        assert_eq!(result.get("low").and_then(DecodedValue::as_u256), Some(U256::from(1u64)));
        assert!(result.get("missing").is_none());
        assert_eq!(result.names().collect::<Vec<_>>(), vec!["low", "items"]);
    }
}
