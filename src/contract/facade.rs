//! Contract bound to an address, an ABI and a provider-or-account

use std::sync::Arc;

use tracing::debug;

use super::dispatch::DispatchTables;
use super::interface::ContractInterface;
use crate::config::Config;
use crate::domain::abi::{Abi, AbiCoder, CallResult, FunctionAbi};
use crate::domain::num::{add_percent, ArgValue};
use crate::error::{Error, Result};
use crate::infrastructure::abi::{get_selector_from_name, FeltAbiCoder};
use crate::infrastructure::network::{
    AddTransactionResponse, ContractProvider, EstimateFeeResponse, Invocation,
};

pub struct Contract {
    abi: Arc<Abi>,
    address: String,
    provider: Arc<dyn ContractProvider>,
    deploy_transaction_hash: Option<String>,
    coder: Arc<dyn AbiCoder>,
    config: Config,
    tables: DispatchTables,
}

impl Contract {
    /// Create a contract using the felt calldata coder and default config
    pub fn new(
        abi: impl Into<Arc<Abi>>,
        address: impl Into<String>,
        provider: Arc<dyn ContractProvider>,
    ) -> Self {
        let abi = abi.into();
        let tables = DispatchTables::from_abi(&abi);
        Self {
            abi,
            address: address.into(),
            provider,
            deploy_transaction_hash: None,
            coder: Arc::new(FeltAbiCoder::new()),
            config: Config::default(),
            tables,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_coder(mut self, coder: Arc<dyn AbiCoder>) -> Self {
        self.coder = coder;
        self
    }

    /// Track the transaction that deployed this contract
    pub fn with_deploy_transaction_hash(mut self, hash: impl Into<String>) -> Self {
        self.deploy_transaction_hash = Some(hash.into());
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rebind the ABI and rebuild the dispatch tables
    pub fn set_abi(&mut self, abi: impl Into<Arc<Abi>>) {
        self.abi = abi.into();
        self.tables = DispatchTables::from_abi(&self.abi);
    }

    fn lookup(&self, method: &str) -> Result<Arc<FunctionAbi>> {
        self.abi
            .lookup(method)
            .cloned()
            .ok_or_else(|| Error::MethodNotFound(method.to_string()))
    }

    fn build_invocation(&self, function: &FunctionAbi, args: &[ArgValue]) -> Result<Invocation> {
        let calldata = self.coder.encode_calldata(function, args)?;
        Ok(Invocation {
            contract_address: self.address.clone(),
            entrypoint: function.name.clone(),
            entry_point_selector: get_selector_from_name(&function.name)?,
            calldata,
        })
    }

    /// Provider that can sign, or `Unauthorized`
    fn signer(&self, action: &str, method: &str) -> Result<Arc<dyn ContractProvider>> {
        if !self.provider.can_sign() {
            return Err(Error::Unauthorized(format!("{} '{}'", action, method)));
        }
        Ok(Arc::clone(&self.provider))
    }
}

impl std::fmt::Debug for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contract")
            .field("address", &self.address)
            .field("methods", &self.abi.len())
            .field("can_sign", &self.provider.can_sign())
            .field("deploy_transaction_hash", &self.deploy_transaction_hash)
            .finish()
    }
}

#[async_trait::async_trait]
impl ContractInterface for Contract {
    fn abi(&self) -> &Arc<Abi> {
        &self.abi
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn provider(&self) -> &Arc<dyn ContractProvider> {
        &self.provider
    }

    fn deploy_transaction_hash(&self) -> Option<&str> {
        self.deploy_transaction_hash.as_deref()
    }

    fn tables(&self) -> &DispatchTables {
        &self.tables
    }

    fn attach(&mut self, address: &str) {
        self.address = address.to_string();
    }

    fn connect(&mut self, provider: Arc<dyn ContractProvider>) {
        self.provider = provider;
    }

    async fn deployed(&self) -> Result<&Self> {
        let Some(hash) = self.deploy_transaction_hash.as_deref() else {
            return Ok(self);
        };

        debug!(address = %self.address, hash, "waiting for deployment");
        let status = self.provider.wait_for_transaction(hash).await?;
        if status.is_rejected() {
            return Err(Error::DeploymentFailed {
                hash: hash.to_string(),
                status: status.to_string(),
            });
        }
        Ok(self)
    }

    async fn call(&self, method: &str, args: &[ArgValue]) -> Result<CallResult> {
        let function = self.lookup(method)?;
        let invocation = self.build_invocation(&function, args)?;
        let provider = Arc::clone(&self.provider);

        debug!(
            method,
            address = %invocation.contract_address,
            block = %self.config.block_id,
            "calling contract"
        );
        let raw = provider
            .call_contract(&invocation, &self.config.block_id)
            .await?;
        self.coder.decode_result(&function, &raw)
    }

    async fn invoke(&self, method: &str, args: &[ArgValue]) -> Result<AddTransactionResponse> {
        let function = self.lookup(method)?;
        let provider = self.signer("invoking", method)?;
        let invocation = self.build_invocation(&function, args)?;

        debug!(method, address = %invocation.contract_address, "invoking contract");
        let response = provider.execute(&invocation).await?;
        debug!(method, hash = %response.transaction_hash, "transaction submitted");
        Ok(response)
    }

    async fn estimate(&self, method: &str, args: &[ArgValue]) -> Result<EstimateFeeResponse> {
        let function = self.lookup(method)?;
        let provider = self.signer("estimating", method)?;
        let invocation = self.build_invocation(&function, args)?;

        debug!(method, address = %invocation.contract_address, "estimating fee");
        let fee = provider.estimate_fee(&invocation).await?;
        let suggested_max_fee = add_percent(fee.overall_fee, self.config.fee_margin_percent)?;
        Ok(EstimateFeeResponse {
            overall_fee: fee.overall_fee,
            gas_consumed: fee.gas_consumed,
            gas_price: fee.gas_price,
            suggested_max_fee,
        })
    }

    fn populate(&self, method: &str, args: &[ArgValue]) -> Result<Invocation> {
        let function = self.lookup(method)?;
        self.build_invocation(&function, args)
    }
}
