//! The gno.land client.
//!
//! [`Client`] bundles a signing identity, a network provider, and the
//! chain id transactions are bound to. It exposes the full submission
//! surface (`call`, `send`, `run`, `add_package`, the sponsorship flows)
//! plus the read-only query surface (`query`, `query_account`, `render`).
//!
//! A client is plain read-only configuration; it holds no connection
//! state and no caches, so one value can serve concurrent tasks behind
//! an `Arc` without synchronization.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gno_rust_sdk::{BaseTxCfg, CallMsg, Client, GnoConfig, Signer};
//!
//! # async fn demo(signer: impl Signer + 'static) -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(&GnoConfig::local(), signer)?;
//!
//! let cfg = BaseTxCfg::new(1_000_000, "1000000ugnot");
//! let msg = CallMsg::new("gno.land/r/demo/boards", "CreateBoard")
//!     .with_args(vec!["demo".to_string()]);
//!
//! let outcome = client.call(cfg, vec![msg]).await?;
//! println!("committed at height {}", outcome.height);
//! # Ok(())
//! # }
//! ```

mod queries;
mod txs;

use std::fmt;
use std::sync::Arc;

use crate::config::GnoConfig;
use crate::error::{GnoError, GnoResult};
use crate::rpc::{HttpProvider, Provider};
use crate::signer::Signer;

/// High-level handle to a gno.land chain.
///
/// Both the signer and the provider are optional at construction time so
/// that query-only or offline-signing clients can exist; operations that
/// need a missing piece fail with a configuration error instead of
/// panicking.
pub struct Client {
    signer: Option<Box<dyn Signer>>,
    provider: Option<Arc<dyn Provider>>,
    chain_id: String,
}

impl Client {
    // === Construction ===

    /// Connects to the node described by `config`, signing with `signer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be built from the
    /// configuration.
    pub fn new<S>(config: &GnoConfig, signer: S) -> GnoResult<Self>
    where
        S: Signer + 'static,
    {
        let provider = HttpProvider::new(config)?;
        Ok(Self {
            signer: Some(Box::new(signer)),
            provider: Some(Arc::new(provider)),
            chain_id: config.chain_id().to_string(),
        })
    }

    /// Starts assembling a client piece by piece.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    // === Accessors ===

    /// Chain id transactions are signed against.
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Checks that the client can sign and broadcast.
    ///
    /// # Errors
    ///
    /// Returns [`GnoError::MissingSigner`] or [`GnoError::MissingProvider`]
    /// when the corresponding piece was never supplied, and forwards the
    /// signer's own readiness check.
    pub fn validate(&self) -> GnoResult<()> {
        self.signer()?.validate()?;
        self.provider()?;
        Ok(())
    }

    pub(crate) fn signer(&self) -> GnoResult<&dyn Signer> {
        self.signer.as_deref().ok_or(GnoError::MissingSigner)
    }

    pub(crate) fn provider(&self) -> GnoResult<&dyn Provider> {
        match &self.provider {
            Some(provider) => Ok(provider.as_ref()),
            None => Err(GnoError::MissingProvider),
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("signer", &self.signer.as_ref().map(|s| s.address()))
            .field("provider", &self.provider.is_some())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

/// Builder for [`Client`].
///
/// The build itself is infallible; a half-configured client reports the
/// missing piece the first time an operation needs it.
#[derive(Default)]
pub struct ClientBuilder {
    signer: Option<Box<dyn Signer>>,
    provider: Option<Arc<dyn Provider>>,
    chain_id: Option<String>,
}

impl ClientBuilder {
    /// Signs transactions with `signer`.
    pub fn with_signer<S>(mut self, signer: S) -> Self
    where
        S: Signer + 'static,
    {
        self.signer = Some(Box::new(signer));
        self
    }

    /// Talks to the chain through `provider`.
    pub fn with_provider<P>(mut self, provider: P) -> Self
    where
        P: Provider + 'static,
    {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Signs against `chain_id` instead of the local devnet id.
    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }

    /// Finishes the build.
    pub fn build(self) -> Client {
        Client {
            signer: self.signer,
            provider: self.provider,
            chain_id: self
                .chain_id
                .unwrap_or_else(|| GnoConfig::local().chain_id().to_string()),
        }
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("signer", &self.signer.is_some())
            .field("provider", &self.provider.is_some())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}
