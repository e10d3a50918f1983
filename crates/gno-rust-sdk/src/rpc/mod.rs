//! RPC access to a gno.land node.
//!
//! This module defines the [`Provider`] seam the client submits and
//! queries through, and ships [`HttpProvider`], its Tendermint JSON-RPC
//! implementation.

pub mod http;

pub use http::HttpProvider;

use crate::error::{GnoError, GnoResult};
use async_trait::async_trait;
use gno_rust_sdk_types::{AbciQueryResult, Address, BaseAccount, BroadcastTxCommitResult};
use serde::Deserialize;

/// Wrapper the auth query endpoint puts around the account record.
#[derive(Debug, Deserialize)]
struct QueryAccountResponse {
    #[serde(rename = "BaseAccount")]
    base_account: BaseAccount,
}

/// Read and broadcast access to a node.
///
/// One transaction submission performs at most two round-trips through
/// this trait: an optional account lookup and the broadcast itself. Tests
/// substitute canned implementations.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Run a read-only state query against the node.
    ///
    /// # Errors
    ///
    /// Returns an error when the transport fails or the node rejects the
    /// request.
    async fn abci_query(&self, path: &str, data: Vec<u8>) -> GnoResult<AbciQueryResult>;

    /// Submit a serialized transaction and wait for it to be checked and
    /// committed into a block.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure; chain-side rejection
    /// is reported inside the returned outcome.
    async fn broadcast_tx_commit(&self, tx_bytes: Vec<u8>) -> GnoResult<BroadcastTxCommitResult>;

    /// Fetch the current state of an account.
    ///
    /// # Errors
    ///
    /// Returns an error when the query fails or the account record cannot
    /// be decoded.
    async fn query_account(&self, address: Address) -> GnoResult<BaseAccount> {
        let path = format!("auth/accounts/{address}");
        let result = self.abci_query(&path, Vec::new()).await?;
        if result.is_err() {
            return Err(GnoError::Query {
                path,
                log: result.log,
            });
        }
        let response: QueryAccountResponse = serde_json::from_slice(&result.data)?;
        Ok(response.base_account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedProvider {
        result: AbciQueryResult,
    }

    #[async_trait]
    impl Provider for CannedProvider {
        async fn abci_query(&self, _path: &str, _data: Vec<u8>) -> GnoResult<AbciQueryResult> {
            Ok(self.result.clone())
        }

        async fn broadcast_tx_commit(
            &self,
            _tx_bytes: Vec<u8>,
        ) -> GnoResult<BroadcastTxCommitResult> {
            Ok(BroadcastTxCommitResult::default())
        }
    }

    fn account_address() -> Address {
        "g1jg8mtutu9khhfwc4nxmuhcpftf0pajdhfvsqf5".parse().unwrap()
    }

    #[tokio::test]
    async fn test_query_account_unwraps_envelope() {
        let payload = format!(
            r#"{{"BaseAccount":{{"address":"{}","coins":"250ugnot","account_number":"3","sequence":"12"}}}}"#,
            account_address()
        );
        let provider = CannedProvider {
            result: AbciQueryResult {
                data: payload.into_bytes(),
                ..AbciQueryResult::default()
            },
        };
        let account = provider.query_account(account_address()).await.unwrap();
        assert_eq!(account.account_number, 3);
        assert_eq!(account.sequence, 12);
    }

    #[tokio::test]
    async fn test_query_account_surfaces_chain_error() {
        let provider = CannedProvider {
            result: AbciQueryResult {
                error: Some("/std.UnknownAddressError".to_string()),
                log: "unknown address".to_string(),
                ..AbciQueryResult::default()
            },
        };
        match provider.query_account(account_address()).await {
            Err(GnoError::Query { path, log }) => {
                assert!(path.starts_with("auth/accounts/g1"));
                assert_eq!(log, "unknown address");
            }
            other => panic!("Expected Query error, got {other:?}"),
        }
    }
}
