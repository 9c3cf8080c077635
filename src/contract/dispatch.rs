//! Per-method dispatch tables
//!
//! Each table maps a method name to the calling convention it uses and the
//! ABI entry it encodes against. Entries are plain descriptors: running one
//! goes through the same four contract operations as a direct call.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::abi::{Abi, CallResult, FunctionAbi};
use crate::error::{Error, Result};
use crate::infrastructure::network::{AddTransactionResponse, EstimateFeeResponse, Invocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallingConvention {
    /// Read-only query
    Call,
    /// Signed, state-changing transaction
    Invoke,
    /// Fee estimate, nothing submitted
    Estimate,
    /// Local encoding only
    Populate,
}

/// A table entry: one ABI method bound to one calling convention
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    pub convention: CallingConvention,
    pub function: Arc<FunctionAbi>,
}

impl MethodDescriptor {
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    entries: BTreeMap<String, MethodDescriptor>,
}

impl DispatchTable {
    fn build(abi: &Abi, convention_for: impl Fn(&FunctionAbi) -> CallingConvention) -> Self {
        let entries = abi
            .functions()
            .map(|function| {
                let descriptor = MethodDescriptor {
                    convention: convention_for(&**function),
                    function: Arc::clone(function),
                };
                (function.name.clone(), descriptor)
            })
            .collect();
        Self { entries }
    }

    /// Look up a method, failing if the bound ABI does not declare it
    pub fn get(&self, name: &str) -> Result<&MethodDescriptor> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::MethodNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four tables derived from one ABI
#[derive(Debug, Clone, Default)]
pub struct DispatchTables {
    /// `call` for view functions, `invoke` for the rest
    pub functions: DispatchTable,
    pub call_static: DispatchTable,
    pub populate_transaction: DispatchTable,
    pub estimate_fee: DispatchTable,
}

impl DispatchTables {
    pub fn from_abi(abi: &Abi) -> Self {
        Self {
            functions: DispatchTable::build(abi, |function| {
                if function.is_view() {
                    CallingConvention::Call
                } else {
                    CallingConvention::Invoke
                }
            }),
            call_static: DispatchTable::build(abi, |_| CallingConvention::Call),
            populate_transaction: DispatchTable::build(abi, |_| CallingConvention::Populate),
            estimate_fee: DispatchTable::build(abi, |_| CallingConvention::Estimate),
        }
    }
}

/// Output of a dispatched method, one variant per calling convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodOutput {
    Result(CallResult),
    Transaction(AddTransactionResponse),
    Fee(EstimateFeeResponse),
    Invocation(Invocation),
}

impl MethodOutput {
    pub fn into_result(self) -> Option<CallResult> {
        match self {
            MethodOutput::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn into_transaction(self) -> Option<AddTransactionResponse> {
        match self {
            MethodOutput::Transaction(response) => Some(response),
            _ => None,
        }
    }

    pub fn into_fee(self) -> Option<EstimateFeeResponse> {
        match self {
            MethodOutput::Fee(fee) => Some(fee),
            _ => None,
        }
    }

    pub fn into_invocation(self) -> Option<Invocation> {
        match self {
            MethodOutput::Invocation(invocation) => Some(invocation),
            _ => None,
        }
    }
}
