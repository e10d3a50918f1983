//! Tendermint JSON-RPC transport.

use crate::config::GnoConfig;
use crate::error::{GnoError, GnoResult};
use crate::rpc::Provider;
use async_trait::async_trait;
use gno_rust_sdk_types::{AbciQueryResult, BroadcastTxCommitResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use url::Url;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// ABCI query payloads come wrapped in a `response` envelope.
#[derive(Debug, Deserialize)]
struct AbciEnvelope<T> {
    response: T,
}

/// JSON-RPC client for a gno.land Tendermint node.
///
/// # Example
///
/// ```rust,no_run
/// use gno_rust_sdk::{GnoConfig, HttpProvider};
///
/// let provider = HttpProvider::new(&GnoConfig::portal_loop()).unwrap();
/// ```
#[derive(Debug)]
pub struct HttpProvider {
    url: Url,
    client: Client,
    next_id: AtomicU64,
}

impl HttpProvider {
    /// Creates a provider from a configuration, honoring its timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &GnoConfig) -> GnoResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GnoError::Http)?;
        Ok(Self {
            url: config.rpc_url.clone(),
            client,
            next_id: AtomicU64::new(1),
        })
    }

    /// Creates a provider straight from an RPC URL with default transport
    /// settings.
    pub fn from_url(url: Url) -> Self {
        Self {
            url,
            client: Client::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns the RPC URL requests are sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> GnoResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(method, id, "sending JSON-RPC request");
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        let response: RpcResponse<T> = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if let Some(error) = response.error {
            return Err(GnoError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response.result.ok_or_else(|| GnoError::Rpc {
            code: 0,
            message: "response carries neither result nor error".to_string(),
        })
    }
}

#[async_trait]
impl Provider for HttpProvider {
    async fn abci_query(&self, path: &str, data: Vec<u8>) -> GnoResult<AbciQueryResult> {
        let params = json!({ "path": path, "data": hex::encode(&data) });
        let envelope: AbciEnvelope<AbciQueryResult> = self.call("abci_query", params).await?;
        Ok(envelope.response)
    }

    async fn broadcast_tx_commit(&self, tx_bytes: Vec<u8>) -> GnoResult<BroadcastTxCommitResult> {
        debug!(size = tx_bytes.len(), "broadcasting transaction");
        let params = json!({ "tx": base64::encode(&tx_bytes) });
        self.call("broadcast_tx_commit", params).await
    }
}
