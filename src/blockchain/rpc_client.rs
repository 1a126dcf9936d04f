// src/blockchain/rpc_client.rs
//! JSON-RPC client for fetching contract sub-states.
//!
//! Implements [`SubStateFetcher`] over the chain's JSON-RPC 2.0 API using
//! the `GetSmartContractSubState` method, which returns one named slice of a
//! contract's persisted key/value storage without downloading the full
//! state.

use crate::blockchain::network::NetworkConfig;
use crate::error::ResolverError;
use crate::resolver::collaborators::SubStateFetcher;
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// HTTP JSON-RPC client for the chain API.
///
/// Holds only a connection-pooled `reqwest` client; the endpoint comes from
/// the per-call [`NetworkConfig`], so one instance serves both networks.
#[derive(Clone, Default)]
pub struct ChainRpcClient {
    http: reqwest::Client,
}

/// Envelope of a `GetSmartContractSubState` response. `result` is `null`
/// when the requested key is absent on chain.
#[derive(Debug, Deserialize)]
struct SubStateResponse {
    result: Option<Map<String, Value>>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

impl ChainRpcClient {
    /// Creates a new client with default HTTP settings.
    pub fn new() -> Self {
        ChainRpcClient {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SubStateFetcher for ChainRpcClient {
    /// Fetches the sub-state stored under `key` for the contract at
    /// `address`.
    ///
    /// # Errors
    /// Returns [`ResolverError::SubState`] if:
    /// - The HTTP round-trip fails
    /// - The response body is not a valid JSON-RPC envelope
    /// - The node reports a JSON-RPC error
    async fn get_sub_state(
        &self,
        config: &NetworkConfig,
        address: &str,
        key: &str,
    ) -> Result<Option<Map<String, Value>>, ResolverError> {
        // The node expects the address without its 0x prefix.
        let bare_address = address.trim_start_matches("0x").to_lowercase();
        let request = json!({
            "id": "1",
            "jsonrpc": "2.0",
            "method": "GetSmartContractSubState",
            "params": [bare_address, key, []],
        });

        debug!("fetching sub-state '{}' for {}", key, address);
        let response = self
            .http
            .post(&config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ResolverError::sub_state(key, e))?;

        let envelope: SubStateResponse = response
            .json()
            .await
            .map_err(|e| ResolverError::sub_state(key, e))?;

        if let Some(rpc_error) = envelope.error {
            return Err(ResolverError::sub_state(
                key,
                format!("rpc error {}: {}", rpc_error.code, rpc_error.message),
            ));
        }
        Ok(envelope.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::network::{Network, NetworkConfig};
    use mockito::Matcher;

    fn mock_config() -> NetworkConfig {
        NetworkConfig {
            network: Network::Testnet,
            endpoint: mockito::server_url(),
            bootstrap_address: "0x0000000000000000000000000000000000000000".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_result_object_when_key_exists() {
        let _m = mockito::mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "method": "GetSmartContractSubState",
                "params": ["abc123", "social_guardians", []],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id":"1","jsonrpc":"2.0","result":{"social_guardians":{"0x111":"","0x222":""}}}"#,
            )
            .create();

        let client = ChainRpcClient::new();
        let result = client
            .get_sub_state(&mock_config(), "0xABC123", "social_guardians")
            .await
            .unwrap();

        let map = result.expect("sub-state should be present");
        let guardians = map["social_guardians"].as_object().unwrap();
        assert_eq!(guardians.len(), 2);
    }

    #[tokio::test]
    async fn absent_key_yields_none() {
        let _m = mockito::mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "params": ["abc123", "version", []],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"1","jsonrpc":"2.0","result":null}"#)
            .create();

        let client = ChainRpcClient::new();
        let result = client
            .get_sub_state(&mock_config(), "0xabc123", "version")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn node_error_surfaces_as_sub_state_failure() {
        let _m = mockito::mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "params": ["abc123", "broken_key", []],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"1","jsonrpc":"2.0","error":{"code":-5,"message":"Address not contract"}}"#)
            .create();

        let client = ChainRpcClient::new();
        let err = client
            .get_sub_state(&mock_config(), "0xabc123", "broken_key")
            .await
            .unwrap_err();
        match err {
            ResolverError::SubState { key, .. } => assert_eq!(key, "broken_key"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
