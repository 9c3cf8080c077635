//! Domain layer - numeric values and the ABI model
//!
//! Nothing here touches the network; the contract facade and the
//! infrastructure layer build on these types.

pub mod abi;
pub mod num;
