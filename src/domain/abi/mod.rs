//! ABI domain models and contracts
//!
//! This module defines the ABI model and the coder trait, independent of
//! the calldata layout implemented in `infrastructure::abi`.

mod coder;
mod registry;
mod result;

pub use coder::AbiCoder;
pub use registry::{Abi, FunctionAbi, ParamSpec};
pub use result::{CallResult, DecodedValue};
