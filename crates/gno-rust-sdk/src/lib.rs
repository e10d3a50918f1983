//! # Gno Rust SDK
//!
//! An idiomatic Rust client for gno.land chains.
//!
//! The crate turns user-facing message descriptors into validated,
//! fee-carrying, signed transactions and drives them through the node's
//! two-phase broadcast-and-commit, classifying every failure into a
//! typed error. Key material stays behind the [`Signer`] trait and the
//! network behind the [`Provider`] trait, so both can be swapped or
//! stubbed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gno_rust_sdk::{BaseTxCfg, CallMsg, Client, GnoConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Connect to the portal loop with your own signer.
//!     let signer = my_keychain_signer()?;
//!     let client = Client::new(&GnoConfig::portal_loop(), signer)?;
//!
//!     let cfg = BaseTxCfg::new(1_000_000, "1000000ugnot");
//!     let msg = CallMsg::new("gno.land/r/demo/boards", "CreateBoard")
//!         .with_args(vec!["demo".to_string()]);
//!
//!     let outcome = client.call(cfg, vec![msg]).await?;
//!     println!("committed at height {}", outcome.height);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - the high-level entry point and its submission pipeline
//! - [`transaction`] - message descriptors, validation, and assembly
//! - [`rpc`] - the provider seam and its JSON-RPC implementation
//! - [`signer`] - the signing seam
//! - [`config`] - node endpoints and chain ids
//! - [`error`] - the error taxonomy
//!
//! Wire-level types (transactions, coins, addresses, results) live in
//! the companion `gno-rust-sdk-types` crate, re-exported here as
//! [`types`].

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod client;
pub mod config;
pub mod error;
pub mod rpc;
pub mod signer;
pub mod transaction;

// Re-export main entry points
pub use client::{Client, ClientBuilder};
pub use config::GnoConfig;
pub use error::{GnoError, GnoResult};
pub use rpc::{HttpProvider, Provider};
pub use signer::{SignCfg, Signer};
pub use transaction::{AddPackageMsg, BaseTxCfg, CallMsg, Msg, RunMsg, SendMsg, SponsorTxCfg};

// Re-export the wire types under one roof
pub use gno_rust_sdk_types as types;
