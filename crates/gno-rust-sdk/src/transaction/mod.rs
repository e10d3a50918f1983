//! Transaction construction.
//!
//! This module turns user-facing message descriptors into canonical,
//! wire-ready transactions.
//!
//! # Overview
//!
//! Construction runs in three steps:
//!
//! - **Describe** - callers build [`CallMsg`], [`SendMsg`], [`RunMsg`], or
//!   [`AddPackageMsg`] descriptors (wrapped in [`Msg`] for mixed APIs)
//! - **Validate and convert** - each descriptor checks its own structural
//!   rules, then binds the effective sender and becomes a canonical
//!   network message
//! - **Assemble** - validated messages plus the fee and memo from a
//!   [`BaseTxCfg`] are packed into an unsigned transaction
//!
//! Sponsorship adds a batch step between the first two: the batch is
//! checked for homogeneity and prefixed with a noop placeholder naming
//! the fee payer.
//!
//! # Example
//!
//! ```rust
//! use gno_rust_sdk::transaction::{build_unsigned_tx, BaseTxCfg, CallMsg, Msg};
//! use gno_rust_sdk_types::Address;
//!
//! # fn main() -> gno_rust_sdk::GnoResult<()> {
//! let caller: Address = "g1jg8mtutu9khhfwc4nxmuhcpftf0pajdhfvsqf5".parse()?;
//!
//! let msg = Msg::Call(
//!     CallMsg::new("gno.land/r/demo/app", "Render").with_args(vec![String::new()]),
//! );
//! msg.validate()?;
//!
//! let cfg = BaseTxCfg::new(100_000, "10000ugnot");
//! let tx = build_unsigned_tx(&cfg, vec![msg.into_msg(caller)?])?;
//! assert!(tx.signatures.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod input;
pub mod sponsor;

pub use builder::{build_unsigned_tx, BaseTxCfg, SponsorTxCfg};
pub use input::{AddPackageMsg, CallMsg, Msg, RunMsg, SendMsg};
pub use sponsor::{build_sponsor_batch, verify_sponsor_transaction};
