//! Provider-or-account abstraction
//!
//! The facade never talks to a node itself; every network exchange goes
//! through this trait. Transport, retries, timeouts and nonce ordering all
//! belong to the implementation.

use super::types::{AddTransactionResponse, BlockId, EstimateFee, Invocation, TransactionStatus};
use crate::error::{Error, Result};

/// Execution context a contract is bound to
///
/// A plain provider only answers queries. An account can also sign, and
/// overrides `execute` and `estimate_fee`.
#[async_trait::async_trait]
pub trait ContractProvider: Send + Sync + 'static {
    /// Whether this context can sign transactions
    fn can_sign(&self) -> bool;

    /// Run a read-only query, returning the raw output words
    async fn call_contract(&self, invocation: &Invocation, block_id: &BlockId)
        -> Result<Vec<String>>;

    /// Sign and submit a state-changing transaction
    async fn execute(&self, invocation: &Invocation) -> Result<AddTransactionResponse> {
        Err(Error::Unauthorized(format!(
            "executing '{}'",
            invocation.entrypoint
        )))
    }

    /// Estimate the fee of `invocation` without submitting it
    async fn estimate_fee(&self, invocation: &Invocation) -> Result<EstimateFee> {
        Err(Error::Unauthorized(format!(
            "estimating '{}'",
            invocation.entrypoint
        )))
    }

    /// Wait until the transaction reaches an accepted or rejected status
    async fn wait_for_transaction(&self, transaction_hash: &str) -> Result<TransactionStatus>;
}
