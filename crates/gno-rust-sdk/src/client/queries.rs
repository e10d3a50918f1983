//! Read-only query surface.

use crate::error::{GnoError, GnoResult};
use crate::rpc::Provider;
use gno_rust_sdk_types::{AbciQueryResult, Address, BaseAccount};

use super::Client;

impl Client {
    // === Queries ===

    /// Runs a raw ABCI query against the node.
    ///
    /// Passthrough for query paths the typed helpers do not cover, such
    /// as `vm/qfuncs` or `vm/qfile`.
    ///
    /// # Errors
    ///
    /// Returns [`GnoError::MissingProvider`] on a provider-less client,
    /// or a network error from the transport.
    pub async fn query(&self, path: &str, data: Vec<u8>) -> GnoResult<AbciQueryResult> {
        self.provider()?.abci_query(path, data).await
    }

    /// Fetches the current state of `address`.
    ///
    /// # Errors
    ///
    /// Returns a query error when the account does not exist on chain.
    pub async fn query_account(&self, address: Address) -> GnoResult<BaseAccount> {
        self.provider()?.query_account(address).await
    }

    /// Renders a realm at `pkg_path`, passing `args` to its `Render`
    /// entry point.
    ///
    /// Returns the rendered text alongside the raw query result.
    ///
    /// # Errors
    ///
    /// Returns a query error carrying the chain log when the realm does
    /// not exist or its render call fails.
    pub async fn render(
        &self,
        pkg_path: &str,
        args: &str,
    ) -> GnoResult<(String, AbciQueryResult)> {
        let payload = format!("{pkg_path}:{args}");
        let result = self
            .provider()?
            .abci_query("vm/qrender", payload.into_bytes())
            .await?;
        if result.is_err() {
            return Err(GnoError::Query {
                path: "vm/qrender".to_string(),
                log: result.log,
            });
        }
        let rendered = String::from_utf8_lossy(&result.data).into_owned();
        Ok((rendered, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::HttpProvider;
    use serde_json::json;
    use url::Url;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, method, path},
    };

    fn create_mock_client(server: &MockServer) -> Client {
        let url = Url::parse(&server.uri()).expect("mock server URL is valid");
        Client::builder()
            .with_provider(HttpProvider::from_url(url))
            .build()
    }

    #[tokio::test]
    async fn test_render_returns_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(json!({ "method": "abci_query" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "response": { "data": base64::encode("# Welcome"), "height": "100" }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server);
        let (rendered, result) = client.render("gno.land/r/demo/boards", "").await.unwrap();
        assert_eq!(rendered, "# Welcome");
        assert_eq!(result.height, 100);
    }

    #[tokio::test]
    async fn test_render_surfaces_chain_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "response": {
                        "error": "/vm.InvalidPkgPathError",
                        "log": "invalid package path",
                        "data": ""
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server);
        match client.render("gno.land/r/none", "").await {
            Err(GnoError::Query { path, log }) => {
                assert_eq!(path, "vm/qrender");
                assert_eq!(log, "invalid package path");
            }
            other => panic!("Expected Query error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_query_account_over_rpc() {
        let server = MockServer::start().await;
        let address: Address = "g1jg8mtutu9khhfwc4nxmuhcpftf0pajdhfvsqf5".parse().unwrap();
        let account_json = format!(
            r#"{{"BaseAccount":{{"address":"{address}","coins":"250ugnot","account_number":"3","sequence":"12"}}}}"#
        );

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "response": { "data": base64::encode(account_json) } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_mock_client(&server);
        let account = client.query_account(address).await.unwrap();
        assert_eq!(account.account_number, 3);
        assert_eq!(account.sequence, 12);
        assert_eq!(account.coins.amount_of("ugnot"), 250);
    }

    #[tokio::test]
    async fn test_query_without_provider() {
        let client = Client::builder().build();
        match client.query("vm/qrender", Vec::new()).await {
            Err(GnoError::MissingProvider) => {}
            other => panic!("Expected MissingProvider, got {other:?}"),
        }
    }
}
