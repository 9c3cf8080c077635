//! Error taxonomy shared by the numeric codec and the contract facade

use thiserror::Error;

/// Library result alias
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A string does not match the decimal / hex / whole-number grammar
    #[error("{value} need to be {expected}")]
    Format { value: String, expected: &'static str },

    /// Inclusive bound check failed. The message is matched on by callers.
    #[error("{0}")]
    Range(String),

    /// Value does not fit in 256 bits
    #[error("{0} does not fit in 256 bits")]
    Overflow(String),

    #[error("method '{0}' is not present in the bound ABI")]
    MethodNotFound(String),

    /// State-changing or signing operation on a read-only provider
    #[error("{0} requires a provider that can sign")]
    Unauthorized(String),

    /// Argument list or raw response does not fit the ABI entry
    #[error("abi: {0}")]
    Abi(String),

    #[error("network: {0}")]
    Network(String),

    #[error("contract reverted: {0}")]
    ContractRevert(String),

    #[error("deployment transaction {hash} ended with status {status}")]
    DeploymentFailed { hash: String, status: String },

    #[error("config: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn hex_or_whole_number(value: impl Into<String>) -> Self {
        Error::Format {
            value: value.into(),
            expected: "hex-string or whole-number-string",
        }
    }

    pub(crate) fn hex_string(value: impl Into<String>) -> Self {
        Error::Format {
            value: value.into(),
            expected: "a hex-string",
        }
    }
}
