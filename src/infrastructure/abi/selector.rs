//! Entry-point selector calculation

use alloy_primitives::{keccak256, U256};

use crate::domain::num::to_hex;
use crate::error::Result;

/// Selectors keep the low 250 bits of the keccak-256 digest
const SELECTOR_BITS: usize = 250;

/// Compute the entry-point selector for a function name
pub fn get_selector_from_name(name: &str) -> Result<String> {
    let hash = keccak256(name.as_bytes());
    let mask = (U256::from(1u64) << SELECTOR_BITS) - U256::from(1u64);
    to_hex(U256::from_be_bytes(hash.0) & mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::num::to_big_int;

    #[test]
    fn test_known_selector() {
        assert_eq!(
            get_selector_from_name("increase_balance").unwrap(),
            "0x362398bec32bc0ebb411203221a35a0301193a96f317ebe5e40be9f60d15320"
        );
    }

    #[test]
    fn test_selector_fits_250_bits() {
        for name in ["balanceOf", "transfer", "__execute__", ""] {
            let selector = get_selector_from_name(name).unwrap();
            let value = to_big_int(selector.as_str()).unwrap();
            assert!(value.bit_len() <= SELECTOR_BITS);
        }
    }
}
