//! Numeric conversions and a dynamic contract-call facade for chains whose
//! values are field elements serialized as hex or decimal strings.

pub mod config;
pub mod contract;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use config::Config;
pub use contract::{Contract, ContractInterface, MethodOutput};
pub use domain::abi::{Abi, CallResult, DecodedValue, FunctionAbi, ParamSpec};
pub use domain::num::{ArgValue, BigNumberish};
pub use error::{Error, Result};
pub use infrastructure::network::{
    AddTransactionResponse, BlockId, ContractProvider, EstimateFee, EstimateFeeResponse,
    Invocation, TransactionStatus,
};
