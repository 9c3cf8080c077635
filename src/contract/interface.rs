//! Abstract contract interaction surface

use std::sync::Arc;

use super::dispatch::{CallingConvention, DispatchTable, DispatchTables, MethodDescriptor, MethodOutput};
use crate::domain::abi::{Abi, CallResult};
use crate::domain::num::ArgValue;
use crate::error::Result;
use crate::infrastructure::network::{
    AddTransactionResponse, ContractProvider, EstimateFeeResponse, Invocation,
};

/// Operations every contract binding implements
///
/// Network-bound operations read the address and provider once, when they
/// start. Rebinding needs `&mut self`, so it cannot overlap an operation
/// that is still borrowing the contract.
#[async_trait::async_trait]
pub trait ContractInterface: Send + Sync {
    fn abi(&self) -> &Arc<Abi>;

    fn address(&self) -> &str;

    fn provider(&self) -> &Arc<dyn ContractProvider>;

    fn deploy_transaction_hash(&self) -> Option<&str>;

    /// Dispatch tables derived from the bound ABI
    fn tables(&self) -> &DispatchTables;

    /// Point the contract at another address
    fn attach(&mut self, address: &str);

    /// Switch to another provider or account
    fn connect(&mut self, provider: Arc<dyn ContractProvider>);

    /// Resolve once the deployment transaction is accepted, or right away
    /// when there is none. Fails if the deployment was rejected.
    async fn deployed(&self) -> Result<&Self>;

    /// Read-only query
    async fn call(&self, method: &str, args: &[ArgValue]) -> Result<CallResult>;

    /// Submit a state-changing transaction; needs a signing provider
    async fn invoke(&self, method: &str, args: &[ArgValue]) -> Result<AddTransactionResponse>;

    /// Estimate the fee of an invoke without submitting it
    async fn estimate(&self, method: &str, args: &[ArgValue]) -> Result<EstimateFeeResponse>;

    /// Encode locally; no network
    fn populate(&self, method: &str, args: &[ArgValue]) -> Result<Invocation>;

    fn functions(&self) -> &DispatchTable {
        &self.tables().functions
    }

    fn call_static(&self) -> &DispatchTable {
        &self.tables().call_static
    }

    fn populate_transaction(&self) -> &DispatchTable {
        &self.tables().populate_transaction
    }

    fn estimate_fee(&self) -> &DispatchTable {
        &self.tables().estimate_fee
    }

    /// Run a table entry through the operation its convention names
    async fn dispatch(
        &self,
        descriptor: &MethodDescriptor,
        args: &[ArgValue],
    ) -> Result<MethodOutput> {
        let method = descriptor.name();
        match descriptor.convention {
            CallingConvention::Call => self.call(method, args).await.map(MethodOutput::Result),
            CallingConvention::Invoke => self
                .invoke(method, args)
                .await
                .map(MethodOutput::Transaction),
            CallingConvention::Estimate => {
                self.estimate(method, args).await.map(MethodOutput::Fee)
            }
            CallingConvention::Populate => {
                self.populate(method, args).map(MethodOutput::Invocation)
            }
        }
    }
}
