//! Network boundary - the provider trait and the types it exchanges

mod provider;
mod types;

pub use provider::ContractProvider;
pub use types::{
    AddTransactionResponse, BlockId, EstimateFee, EstimateFeeResponse, Invocation,
    TransactionStatus,
};
