//! ABI infrastructure - felt calldata coding and selector derivation

mod coder;
mod selector;

pub use coder::FeltAbiCoder;
pub use selector::get_selector_from_name;
