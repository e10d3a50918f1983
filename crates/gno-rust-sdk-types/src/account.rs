//! On-chain account state returned by the auth query endpoint.

use crate::address::Address;
use crate::coin::Coins;
use crate::encoding;
use serde::{Deserialize, Serialize};

/// The chain's base account record.
///
/// `account_number` and `sequence` feed transaction signing; the rest is
/// informational.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAccount {
    /// Account address.
    pub address: Address,
    /// Spendable balance.
    pub coins: Coins,
    /// Public key as reported by the node, absent until the account has
    /// signed at least once.
    #[serde(default)]
    pub public_key: Option<serde_json::Value>,
    /// Chain-assigned account number.
    #[serde(with = "encoding::uint_str")]
    pub account_number: u64,
    /// Next expected sequence number.
    #[serde(with = "encoding::uint_str")]
    pub sequence: u64,
}
