//! ABI coder trait

use super::{CallResult, FunctionAbi};
use crate::domain::num::ArgValue;
use crate::error::Result;

/// Trait for calldata encoding / response decoding implementations
///
/// The contract facade only marshals through this trait, so a different
/// calldata layout can be swapped in without touching the dispatch code.
pub trait AbiCoder: Send + Sync {
    /// Encode positional arguments into calldata words (decimal strings)
    ///
    /// # Errors
    /// * `Error::Format` - an argument is not a valid numeric representation
    /// * `Error::Abi` - argument count or type does not match `function`
    fn encode_calldata(&self, function: &FunctionAbi, args: &[ArgValue]) -> Result<Vec<String>>;

    /// Decode raw output words into an ordered, name-addressable result
    fn decode_result(&self, function: &FunctionAbi, raw: &[String]) -> Result<CallResult>;
}
