//! The signing seam between the SDK and key management.

use crate::error::GnoResult;
use gno_rust_sdk_types::{Address, Tx};

/// Everything a signer needs to produce a signature: the transaction plus
/// the chain and account coordinates the signature must bind to.
///
/// Produced per signing attempt and never persisted.
#[derive(Clone, Debug)]
pub struct SignCfg {
    /// The transaction to sign.
    pub tx: Tx,
    /// Chain identifier the signature commits to.
    pub chain_id: String,
    /// Chain-assigned account number of the signing account.
    pub account_number: u64,
    /// Sequence number this signature consumes.
    pub sequence_number: u64,
}

/// Signs transactions on behalf of one account.
///
/// Key storage and derivation are outside the SDK; implementations wrap a
/// keybase, a hardware wallet, or a fixture key. An implementation must
/// append its signature to the transaction it returns, leaving existing
/// signatures in place so a transaction can collect more than one.
pub trait Signer: Send + Sync {
    /// The address of the signing account.
    fn address(&self) -> Address;

    /// Sign the transaction described by `cfg` and return it with this
    /// signer's signature attached.
    ///
    /// # Errors
    ///
    /// Returns an error when the key material is unavailable or refuses
    /// to sign.
    fn sign(&self, cfg: SignCfg) -> GnoResult<Tx>;

    /// Check that the signer is ready to produce signatures.
    ///
    /// # Errors
    ///
    /// Returns an error when the signing account is unusable.
    fn validate(&self) -> GnoResult<()> {
        Ok(())
    }
}
