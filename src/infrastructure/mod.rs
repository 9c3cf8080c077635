//! Infrastructure layer - collaborator boundaries
//!
//! This layer contains:
//! - The felt calldata coder and selector derivation
//! - The provider-or-account trait and its wire types

pub mod abi;
pub mod network;
