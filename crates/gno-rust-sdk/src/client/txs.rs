//! Transaction submission.
//!
//! Every submission runs the same pipeline: validate the client and the
//! configuration, convert and validate the messages, assemble the
//! unsigned transaction, resolve the signing coordinates, sign, and
//! broadcast-and-commit. Local failures surface before any network call.

use tracing::{debug, info};

use crate::error::{GnoError, GnoResult};
use crate::rpc::Provider;
use crate::signer::{SignCfg, Signer};
use crate::transaction::{
    build_sponsor_batch, build_unsigned_tx, verify_sponsor_transaction, AddPackageMsg, BaseTxCfg,
    CallMsg, Msg, RunMsg, SendMsg, SponsorTxCfg,
};
use gno_rust_sdk_types::{Address, BroadcastTxCommitResult, Tx};

use super::Client;

impl Client {
    // === Submission ===

    /// Calls exported realm functions, one call per message.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the client or `cfg` is
    /// incomplete, a validation error for structurally invalid messages,
    /// and a chain error when the node rejects the transaction at either
    /// processing phase.
    pub async fn call(
        &self,
        cfg: BaseTxCfg,
        msgs: Vec<CallMsg>,
    ) -> GnoResult<BroadcastTxCommitResult> {
        self.send_transaction(cfg, msgs.into_iter().map(Msg::Call).collect())
            .await
    }

    /// Transfers coins, one transfer per message.
    ///
    /// # Errors
    ///
    /// Same contract as [`Client::call`].
    pub async fn send(
        &self,
        cfg: BaseTxCfg,
        msgs: Vec<SendMsg>,
    ) -> GnoResult<BroadcastTxCommitResult> {
        self.send_transaction(cfg, msgs.into_iter().map(Msg::Send).collect())
            .await
    }

    /// Executes one-shot scripts, one script per message.
    ///
    /// # Errors
    ///
    /// Same contract as [`Client::call`].
    pub async fn run(
        &self,
        cfg: BaseTxCfg,
        msgs: Vec<RunMsg>,
    ) -> GnoResult<BroadcastTxCommitResult> {
        self.send_transaction(cfg, msgs.into_iter().map(Msg::Run).collect())
            .await
    }

    /// Publishes packages, one package per message.
    ///
    /// # Errors
    ///
    /// Same contract as [`Client::call`].
    pub async fn add_package(
        &self,
        cfg: BaseTxCfg,
        msgs: Vec<AddPackageMsg>,
    ) -> GnoResult<BroadcastTxCommitResult> {
        self.send_transaction(cfg, msgs.into_iter().map(Msg::AddPackage).collect())
            .await
    }

    // === Sponsorship ===

    /// Broadcasts a batch on behalf of `sponsoree`, paying its fees with
    /// this client's signer.
    ///
    /// The assembled transaction carries a noop placeholder at message
    /// index 0 naming the fee payer; the user messages execute as
    /// `sponsoree`.
    ///
    /// # Errors
    ///
    /// Returns a consistency error for empty or mixed batches and for
    /// caller-supplied noops, plus the contract of [`Client::call`].
    pub async fn sponsor(
        &self,
        cfg: BaseTxCfg,
        sponsoree: Address,
        msgs: Vec<Msg>,
    ) -> GnoResult<BroadcastTxCommitResult> {
        self.validate()?;
        cfg.validate()?;
        let sponsor = self.signer()?.address();
        let batch = build_sponsor_batch(sponsor, sponsoree, msgs)?;
        let tx = build_unsigned_tx(&cfg, batch)?;
        self.sign_and_broadcast(tx, cfg.account_number, cfg.sequence_number)
            .await
    }

    /// Assembles an unsigned transaction whose fees `cfg.sponsor_address`
    /// will pay, with this client's signer as the acting principal.
    ///
    /// No network access happens here; the caller signs the result with
    /// [`Client::sign_transaction`] and forwards it to the sponsor, who
    /// broadcasts it through [`Client::execute_sponsor_transaction`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an incomplete `cfg` or a
    /// signer-less client, and a consistency or validation error for a
    /// bad batch.
    pub fn new_sponsor_transaction(&self, cfg: SponsorTxCfg, msgs: Vec<Msg>) -> GnoResult<Tx> {
        cfg.validate()?;
        let sender = self.signer()?.address();
        let batch = build_sponsor_batch(cfg.sponsor_address, sender, msgs)?;
        build_unsigned_tx(&cfg.base, batch)
    }

    /// Signs `tx` against this client's chain id and the given account
    /// coordinates, appending to any signatures already present.
    ///
    /// # Errors
    ///
    /// Returns [`GnoError::MissingSigner`] on a signer-less client and
    /// [`GnoError::Sign`] when the signer fails.
    pub fn sign_transaction(
        &self,
        tx: Tx,
        account_number: u64,
        sequence_number: u64,
    ) -> GnoResult<Tx> {
        let cfg = SignCfg {
            tx,
            chain_id: self.chain_id().to_string(),
            account_number,
            sequence_number,
        };
        self.signer()?.sign(cfg).map_err(GnoError::into_sign)
    }

    /// Countersigns and broadcasts a sponsoree-signed transaction,
    /// paying its fees.
    ///
    /// The sponsor's own account coordinates are resolved from the
    /// chain.
    ///
    /// # Errors
    ///
    /// Returns a consistency error when `tx` carries no messages, no
    /// signatures, or no noop marker at index 0, plus the contract of
    /// [`Client::call`].
    pub async fn execute_sponsor_transaction(
        &self,
        tx: Tx,
    ) -> GnoResult<BroadcastTxCommitResult> {
        self.validate()?;
        verify_sponsor_transaction(&tx)?;
        self.sign_and_broadcast(tx, 0, 0).await
    }

    // === Pipeline ===

    async fn send_transaction(
        &self,
        cfg: BaseTxCfg,
        msgs: Vec<Msg>,
    ) -> GnoResult<BroadcastTxCommitResult> {
        self.validate()?;
        cfg.validate()?;
        if msgs.is_empty() {
            return Err(GnoError::NoMessages);
        }
        let sender = self.signer()?.address();
        let mut converted = Vec::with_capacity(msgs.len());
        for msg in msgs {
            msg.validate()?;
            converted.push(msg.into_msg(sender)?);
        }
        let tx = build_unsigned_tx(&cfg, converted)?;
        self.sign_and_broadcast(tx, cfg.account_number, cfg.sequence_number)
            .await
    }

    async fn sign_and_broadcast(
        &self,
        tx: Tx,
        account_number: u64,
        sequence_number: u64,
    ) -> GnoResult<BroadcastTxCommitResult> {
        let signer = self.signer()?;
        let provider = self.provider()?;

        // Both zero means the caller wants the chain's current values;
        // any other combination is used verbatim.
        let (account_number, sequence_number) = if account_number == 0 && sequence_number == 0 {
            let address = signer.address();
            let account =
                provider
                    .query_account(address)
                    .await
                    .map_err(|source| GnoError::AccountQuery {
                        address: address.to_string(),
                        source: Box::new(source),
                    })?;
            (account.account_number, account.sequence)
        } else {
            (account_number, sequence_number)
        };

        let signed = signer
            .sign(SignCfg {
                tx,
                chain_id: self.chain_id().to_string(),
                account_number,
                sequence_number,
            })
            .map_err(GnoError::into_sign)?;

        let tx_bytes = signed.to_wire_bytes()?;
        debug!(
            account_number,
            sequence_number,
            size = tx_bytes.len(),
            "submitting transaction"
        );
        let outcome = provider.broadcast_tx_commit(tx_bytes).await?;

        if outcome.check_tx.is_err() {
            return Err(GnoError::CheckTx {
                log: outcome.check_tx.log.clone(),
                outcome: Box::new(outcome),
            });
        }
        if outcome.deliver_tx.is_err() {
            return Err(GnoError::DeliverTx {
                log: outcome.deliver_tx.log.clone(),
                outcome: Box::new(outcome),
            });
        }

        info!(
            txn_hash = %outcome.hash_hex(),
            height = outcome.height,
            "transaction committed"
        );
        Ok(outcome)
    }
}
