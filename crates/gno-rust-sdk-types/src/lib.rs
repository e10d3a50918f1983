//! # gno.land Rust SDK types
//!
//! Core wire types for the gno.land blockchain: addresses, coins, source
//! packages, canonical transaction messages, transactions, account state and
//! query/broadcast results.
//!
//! This crate is the leaf of the SDK workspace. It carries no networking or
//! signing dependencies, so it can be used on its own wherever the wire types
//! are needed (indexers, signers, test fixtures).
//!
//! ## Quick Start
//!
//! ```rust
//! use gno_rust_sdk_types::{Address, Coin, Coins, Fee, Msg, MsgSend, Tx};
//!
//! let from: Address = "g1jg8mtutu9khhfwc4nxmuhcpftf0pajdhfvsqf5".parse().unwrap();
//! let to = Address::ZERO;
//!
//! let msg = Msg::Send(MsgSend {
//!     from_address: from,
//!     to_address: to,
//!     amount: Coins::parse("100ugnot").unwrap(),
//! });
//!
//! let fee = Fee::new(100_000, Coin::new("ugnot", 10_000).unwrap());
//! let tx = Tx::new(vec![msg], fee, "");
//! assert!(tx.signatures.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod abci;
pub mod account;
pub mod address;
pub mod coin;
pub mod msg;
pub mod package;
pub mod tx;

mod encoding;

// Re-export the commonly used types at the crate root.
pub use abci::{AbciQueryResult, BroadcastTxCommitResult, Event, EventAttribute, TxResult};
pub use account::BaseAccount;
pub use address::{Address, AddressError};
pub use coin::{Coin, CoinError, Coins};
pub use msg::{Msg, MsgAddPackage, MsgCall, MsgKind, MsgNoop, MsgRun, MsgSend};
pub use package::{MemFile, MemPackage};
pub use tx::{Fee, Signature, Tx};
