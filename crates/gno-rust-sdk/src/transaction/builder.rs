//! Transaction configuration and assembly.

use crate::error::{GnoError, GnoResult};
use gno_rust_sdk_types::{Address, Coin, Fee, Msg, Tx};

/// Per-call transaction configuration: gas budget, fee, memo, and the
/// account coordinates used for signing.
///
/// Leaving both `account_number` and `sequence_number` at zero asks the
/// client to resolve them from the chain; any other combination is used
/// verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseTxCfg {
    /// Maximum gas the transaction may consume.
    pub gas_wanted: i64,
    /// Fee paid for the gas budget, as a single coin string.
    pub gas_fee: String,
    /// Chain-assigned account number, zero to auto-resolve.
    pub account_number: u64,
    /// Sequence number, zero to auto-resolve.
    pub sequence_number: u64,
    /// Free-form memo recorded on-chain.
    pub memo: String,
}

impl BaseTxCfg {
    /// Create a configuration with auto-resolved account coordinates and
    /// an empty memo.
    pub fn new(gas_wanted: i64, gas_fee: impl Into<String>) -> Self {
        Self {
            gas_wanted,
            gas_fee: gas_fee.into(),
            account_number: 0,
            sequence_number: 0,
            memo: String::new(),
        }
    }

    /// Sets the memo.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Sets an explicit account number, bypassing auto-resolution when
    /// the sequence number is set too.
    pub fn with_account_number(mut self, account_number: u64) -> Self {
        self.account_number = account_number;
        self
    }

    /// Sets an explicit sequence number, bypassing auto-resolution when
    /// the account number is set too.
    pub fn with_sequence_number(mut self, sequence_number: u64) -> Self {
        self.sequence_number = sequence_number;
        self
    }

    /// Check the configuration before any network access.
    ///
    /// # Errors
    ///
    /// Returns [`GnoError::InvalidGasWanted`] for a non-positive gas
    /// budget and [`GnoError::InvalidGasFee`] for an empty fee string.
    pub fn validate(&self) -> GnoResult<()> {
        if self.gas_wanted <= 0 {
            return Err(GnoError::InvalidGasWanted {
                value: self.gas_wanted,
            });
        }
        if self.gas_fee.is_empty() {
            return Err(GnoError::InvalidGasFee {
                value: self.gas_fee.clone(),
            });
        }
        Ok(())
    }
}

/// Configuration for building a transaction another principal will pay
/// fees for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SponsorTxCfg {
    /// The ordinary transaction configuration.
    pub base: BaseTxCfg,
    /// Account that will countersign and pay fees.
    pub sponsor_address: Address,
}

impl SponsorTxCfg {
    /// Create a sponsor configuration.
    pub fn new(base: BaseTxCfg, sponsor_address: Address) -> Self {
        Self {
            base,
            sponsor_address,
        }
    }

    /// Check the configuration before any network access.
    ///
    /// # Errors
    ///
    /// Returns the base configuration's errors, or
    /// [`GnoError::InvalidSponsorAddress`] when the sponsor is the zero
    /// address.
    pub fn validate(&self) -> GnoResult<()> {
        self.base.validate()?;
        if self.sponsor_address.is_zero() {
            return Err(GnoError::InvalidSponsorAddress);
        }
        Ok(())
    }
}

/// Pack canonical messages, fee, and memo into an unsigned transaction.
///
/// # Errors
///
/// Returns [`GnoError::InvalidGasFee`] when the gas fee string does not
/// parse as a single coin.
pub fn build_unsigned_tx(cfg: &BaseTxCfg, msgs: Vec<Msg>) -> GnoResult<Tx> {
    let gas_fee = Coin::parse(&cfg.gas_fee).map_err(|_| GnoError::InvalidGasFee {
        value: cfg.gas_fee.clone(),
    })?;
    Ok(Tx::new(
        msgs,
        Fee::new(cfg.gas_wanted, gas_fee),
        cfg.memo.clone(),
    ))
}
