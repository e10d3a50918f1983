//! Network configuration for the gno.land SDK.
//!
//! This module provides configuration options for connecting to gno.land
//! networks (portal loop, public testnets) or custom endpoints.

use std::time::Duration;
use url::Url;

/// Configuration for the gno.land client.
///
/// Use the builder methods to customize the configuration, or use one of
/// the preset configurations like [`GnoConfig::portal_loop()`],
/// [`GnoConfig::test5()`], or [`GnoConfig::local()`].
///
/// # Example
///
/// ```rust
/// use gno_rust_sdk::GnoConfig;
///
/// // Use the portal loop with default settings
/// let config = GnoConfig::portal_loop();
///
/// // Custom configuration
/// let config = GnoConfig::custom("https://rpc.example.com:26657", "example-1")
///     .unwrap()
///     .with_timeout(std::time::Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct GnoConfig {
    /// Tendermint RPC URL of the node
    pub(crate) rpc_url: Url,
    /// Chain identifier signed into every transaction
    pub(crate) chain_id: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for GnoConfig {
    fn default() -> Self {
        Self::local()
    }
}

impl GnoConfig {
    /// Creates a configuration for the gno.land portal loop.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gno_rust_sdk::GnoConfig;
    ///
    /// let config = GnoConfig::portal_loop();
    /// ```
    pub fn portal_loop() -> Self {
        Self {
            rpc_url: Url::parse("https://rpc.gno.land:443").expect("valid portal loop URL"),
            chain_id: "portal-loop".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Creates a configuration for the test5 public testnet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gno_rust_sdk::GnoConfig;
    ///
    /// let config = GnoConfig::test5();
    /// ```
    pub fn test5() -> Self {
        Self {
            rpc_url: Url::parse("https://rpc.test5.gno.land:443").expect("valid test5 URL"),
            chain_id: "test5".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Creates a configuration for a local development node.
    ///
    /// This assumes a `gnoland` node running on the default RPC port
    /// (26657) with the default development chain id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gno_rust_sdk::GnoConfig;
    ///
    /// let config = GnoConfig::local();
    /// ```
    pub fn local() -> Self {
        Self {
            rpc_url: Url::parse("http://127.0.0.1:26657").expect("valid local URL"),
            chain_id: "dev".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Creates a custom configuration from an RPC URL and chain id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gno_rust_sdk::GnoConfig;
    ///
    /// let config = GnoConfig::custom("https://my-node.example.com:26657", "example-1").unwrap();
    /// ```
    pub fn custom(rpc_url: &str, chain_id: impl Into<String>) -> Result<Self, url::ParseError> {
        Ok(Self {
            rpc_url: Url::parse(rpc_url)?,
            chain_id: chain_id.into(),
            timeout: Duration::from_secs(30),
        })
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the chain id signed into transactions.
    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = chain_id.into();
        self
    }

    /// Returns the RPC URL.
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Returns the chain id.
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
