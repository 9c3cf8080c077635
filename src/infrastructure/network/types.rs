//! Wire-adjacent request / response types exchanged with a provider

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::domain::num::{clean_hex, is_hex, is_string_whole_number};
use crate::error::{Error, Result};

/// A fully encoded call that has not been sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub contract_address: String,
    /// Function name
    pub entrypoint: String,
    /// Hex selector derived from the function name
    pub entry_point_selector: String,
    /// Decimal-string words
    pub calldata: Vec<String>,
}

/// Block to run read-only queries against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BlockId {
    #[default]
    Pending,
    Latest,
    Number(u64),
    Hash(String),
}

impl FromStr for BlockId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "pending" => Ok(BlockId::Pending),
            "latest" => Ok(BlockId::Latest),
            _ if is_string_whole_number(value) => value
                .parse()
                .map(BlockId::Number)
                .map_err(|_| Error::Config(format!("block number out of range: {}", value))),
            _ if is_hex(value) && value.len() > 2 => Ok(BlockId::Hash(clean_hex(value))),
            _ => Err(Error::Config(format!(
                "invalid block id '{}': expected pending, latest, a number or a block hash",
                value
            ))),
        }
    }
}

impl TryFrom<String> for BlockId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<BlockId> for String {
    fn from(value: BlockId) -> Self {
        value.to_string()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockId::Pending => f.write_str("pending"),
            BlockId::Latest => f.write_str("latest"),
            BlockId::Number(n) => write!(f, "{}", n),
            BlockId::Hash(hash) => f.write_str(hash),
        }
    }
}

/// Response to a submitted state-changing transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTransactionResponse {
    pub transaction_hash: String,
}

/// Fee estimate as returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateFee {
    pub overall_fee: U256,
    pub gas_consumed: U256,
    pub gas_price: U256,
}

/// Fee estimate plus the configured safety margin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateFeeResponse {
    pub overall_fee: U256,
    pub gas_consumed: U256,
    pub gas_price: U256,
    /// `overall_fee` bumped by `fee_margin_percent`
    pub suggested_max_fee: U256,
}

/// Transaction lifecycle as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    NotReceived,
    Received,
    Pending,
    AcceptedOnL2,
    AcceptedOnL1,
    Rejected,
    Reverted,
}

impl TransactionStatus {
    /// Terminal failure
    pub fn is_rejected(&self) -> bool {
        matches!(self, TransactionStatus::Rejected | TransactionStatus::Reverted)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            TransactionStatus::AcceptedOnL2 | TransactionStatus::AcceptedOnL1
        )
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionStatus::NotReceived => "NOT_RECEIVED",
            TransactionStatus::Received => "RECEIVED",
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::AcceptedOnL2 => "ACCEPTED_ON_L2",
            TransactionStatus::AcceptedOnL1 => "ACCEPTED_ON_L1",
            TransactionStatus::Rejected => "REJECTED",
            TransactionStatus::Reverted => "REVERTED",
        };
        f.write_str(label)
    }
}
