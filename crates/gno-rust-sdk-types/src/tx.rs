//! Assembled transactions and their signing payload.

use crate::coin::Coin;
use crate::encoding;
use crate::msg::Msg;
use serde::{Deserialize, Serialize};

/// Execution budget and fee attached to a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Maximum gas the transaction may consume.
    #[serde(with = "encoding::int_str")]
    pub gas_wanted: i64,
    /// Coin paid for the gas budget.
    pub gas_fee: Coin,
}

impl Fee {
    /// Create a fee from its gas budget and fee coin.
    pub fn new(gas_wanted: i64, gas_fee: Coin) -> Self {
        Self {
            gas_wanted,
            gas_fee,
        }
    }
}

/// A detached signature over the transaction's signing payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Public key of the signing account.
    #[serde(with = "encoding::b64_bytes")]
    pub pub_key: Vec<u8>,
    /// Signature bytes.
    #[serde(with = "encoding::b64_bytes")]
    pub signature: Vec<u8>,
}

/// A transaction: ordered messages, fee, signatures, and memo.
///
/// Built unsigned; signatures are attached exactly once before broadcast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tx {
    /// Messages executed in order.
    #[serde(rename = "msg")]
    pub msgs: Vec<Msg>,
    /// Gas budget and fee.
    pub fee: Fee,
    /// Signatures, one per signing account.
    pub signatures: Vec<Signature>,
    /// Free-form memo recorded on-chain.
    pub memo: String,
}

/// The payload a signer commits to, serialized with fields in canonical
/// order so every signer produces identical bytes.
#[derive(Serialize)]
struct SignDoc<'a> {
    #[serde(with = "encoding::uint_str")]
    account_number: u64,
    chain_id: &'a str,
    fee: &'a Fee,
    memo: &'a str,
    msgs: &'a [Msg],
    #[serde(with = "encoding::uint_str")]
    sequence: u64,
}

impl Tx {
    /// Assemble an unsigned transaction.
    pub fn new(msgs: Vec<Msg>, fee: Fee, memo: impl Into<String>) -> Self {
        Self {
            msgs,
            fee,
            signatures: Vec::new(),
            memo: memo.into(),
        }
    }

    /// Whether the transaction is marked sponsorship-eligible, i.e. its
    /// first message is a noop placeholder.
    pub fn is_sponsor(&self) -> bool {
        matches!(self.msgs.first(), Some(Msg::Noop(_)))
    }

    /// Serialize the transaction for broadcast.
    ///
    /// # Errors
    ///
    /// Returns the underlying serialization error.
    pub fn to_wire_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Serialize the payload a signature must cover for the given chain
    /// and account coordinates.
    ///
    /// # Errors
    ///
    /// Returns the underlying serialization error.
    pub fn sign_bytes(
        &self,
        chain_id: &str,
        account_number: u64,
        sequence: u64,
    ) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&SignDoc {
            account_number,
            chain_id,
            fee: &self.fee,
            memo: &self.memo,
            msgs: &self.msgs,
            sequence,
        })
    }
}
