//! Error types for the gno.land SDK.
//!
//! This module provides a unified error type [`GnoError`] covering every
//! failure the SDK can report, from local validation through chain-side
//! transaction rejection.

use gno_rust_sdk_types::{AddressError, BroadcastTxCommitResult, CoinError, MsgKind};
use thiserror::Error;

/// A specialized Result type for gno.land SDK operations.
pub type GnoResult<T> = Result<T, GnoError>;

/// The main error type for the gno.land SDK.
///
/// Local errors (configuration, validation, consistency) are always
/// detected before any network call, so no partial side effects occur for
/// invalid input. Chain errors carry the full broadcast outcome so callers
/// can still inspect gas usage on failure.
#[derive(Error, Debug)]
pub enum GnoError {
    // === Configuration ===
    /// No signer is attached to the client
    #[error("missing signer")]
    MissingSigner,

    /// No network client is attached to the client
    #[error("missing network client")]
    MissingProvider,

    /// The gas budget is zero or negative
    #[error("invalid gas wanted: {value}")]
    InvalidGasWanted {
        /// The rejected gas budget
        value: i64,
    },

    /// The gas fee string is empty or does not parse as a coin
    #[error("invalid gas fee: {value:?}")]
    InvalidGasFee {
        /// The rejected gas fee expression
        value: String,
    },

    // === Validation ===
    /// A call message carries an empty package path
    #[error("empty package path")]
    EmptyPkgPath,

    /// A call message carries an empty function name
    #[error("empty function name")]
    EmptyFuncName,

    /// A run or publish message carries no package files
    #[error("empty package to run")]
    EmptyPackage,

    /// A send message targets the zero address
    #[error("invalid send to address: {address}")]
    InvalidToAddress {
        /// The rejected destination address
        address: String,
    },

    /// A message amount does not parse as coins
    #[error("invalid amount {value:?}: {source}")]
    InvalidAmount {
        /// The rejected coin expression
        value: String,
        /// The underlying parse failure
        source: CoinError,
    },

    /// A sponsor configuration carries the zero sponsor address
    #[error("invalid sponsor address")]
    InvalidSponsorAddress,

    // === Consistency ===
    /// A message batch is empty
    #[error("no messages provided")]
    NoMessages,

    /// A sponsor batch mixes message types
    #[error("mixed message types not allowed: expected {expected}, found {found}")]
    MixedMessageTypes {
        /// Discriminant of the first message in the batch
        expected: MsgKind,
        /// The mismatched discriminant
        found: MsgKind,
    },

    /// A message discriminant is not accepted in this position
    #[error("unsupported message type: {kind}")]
    UnsupportedMsgType {
        /// The rejected discriminant
        kind: MsgKind,
    },

    /// A transaction handed off for sponsorship carries no signatures
    #[error("no signatures provided")]
    NoSignatures,

    /// A transaction handed off for sponsorship is not marked
    /// sponsorship-eligible
    #[error("invalid sponsor transaction")]
    InvalidSponsorTx,

    // === Signing ===
    /// The signer refused or failed
    #[error("failed to sign transaction: {reason}")]
    Sign {
        /// Signer-provided failure reason
        reason: String,
    },

    // === Network ===
    /// Error occurred during HTTP communication
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error occurred during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during URL parsing
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The node returned a JSON-RPC level error
    #[error("RPC error ({code}): {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Error message from the node
        message: String,
    },

    /// A state query was rejected by the node
    #[error("query {path:?} failed: {log}")]
    Query {
        /// Query path that failed
        path: String,
        /// Chain-provided log text
        log: String,
    },

    /// The account lookup backing sequence resolution failed
    #[error("query account {address} failed: {source}")]
    AccountQuery {
        /// Address being resolved
        address: String,
        /// The underlying failure
        source: Box<GnoError>,
    },

    // === Chain ===
    /// The transaction was rejected before execution; no resources were
    /// spent on-chain
    #[error("check transaction failed: log:{log}")]
    CheckTx {
        /// Chain-provided log text
        log: String,
        /// Full broadcast outcome
        outcome: Box<BroadcastTxCommitResult>,
    },

    /// The transaction was included in a block but execution failed; the
    /// result is final and gas may have been consumed
    #[error("deliver transaction failed: log:{log}")]
    DeliverTx {
        /// Chain-provided log text
        log: String,
        /// Full broadcast outcome
        outcome: Box<BroadcastTxCommitResult>,
    },

    // === Conversions ===
    /// Error occurred while handling coins
    #[error("coin error: {0}")]
    Coin(#[from] CoinError),

    /// Error occurred while handling addresses
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    /// Any other error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl GnoError {
    /// Creates a new signing error
    pub fn sign<S: Into<String>>(reason: S) -> Self {
        Self::Sign {
            reason: reason.into(),
        }
    }

    /// Wraps an arbitrary failure from the signing step, keeping already
    /// typed signing errors untouched.
    pub(crate) fn into_sign(self) -> Self {
        match self {
            err @ Self::Sign { .. } => err,
            other => Self::sign(other.to_string()),
        }
    }

    /// Returns true if this error comes from client configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingSigner
                | Self::MissingProvider
                | Self::InvalidGasWanted { .. }
                | Self::InvalidGasFee { .. }
        )
    }

    /// Returns true if this error comes from per-message validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyPkgPath
                | Self::EmptyFuncName
                | Self::EmptyPackage
                | Self::InvalidToAddress { .. }
                | Self::InvalidAmount { .. }
                | Self::InvalidSponsorAddress
                | Self::Coin(_)
                | Self::Address(_)
        )
    }

    /// Returns true if this error comes from batch or transaction shape
    /// checks
    pub fn is_consistency(&self) -> bool {
        matches!(
            self,
            Self::NoMessages
                | Self::MixedMessageTypes { .. }
                | Self::UnsupportedMsgType { .. }
                | Self::NoSignatures
                | Self::InvalidSponsorTx
        )
    }

    /// Returns true if this error was reported by the chain after a
    /// broadcast
    pub fn is_chain(&self) -> bool {
        matches!(self, Self::CheckTx { .. } | Self::DeliverTx { .. })
    }

    /// Returns true if this error comes from the transport layer
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::Json(_)
                | Self::Url(_)
                | Self::Rpc { .. }
                | Self::Query { .. }
                | Self::AccountQuery { .. }
        )
    }

    /// The full broadcast outcome attached to a chain error, if any.
    ///
    /// Lets callers inspect gas consumption even when the transaction
    /// failed.
    pub fn outcome(&self) -> Option<&BroadcastTxCommitResult> {
        match self {
            Self::CheckTx { outcome, .. } | Self::DeliverTx { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}
