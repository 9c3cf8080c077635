//! Contract facade - one interaction surface over call / invoke /
//! estimate / populate, plus per-method dispatch tables built from the ABI

mod dispatch;
mod facade;
mod interface;

pub use dispatch::{
    CallingConvention, DispatchTable, DispatchTables, MethodDescriptor, MethodOutput,
};
pub use facade::Contract;
pub use interface::ContractInterface;
