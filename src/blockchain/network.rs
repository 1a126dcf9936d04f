// src/blockchain/network.rs
//! Network selection for the SSI resolver.
//!
//! Maps a caller-supplied network name to the chain endpoint and the
//! well-known bootstrap contract ("init tyron") used as the entry point for
//! name resolution on that network.

use serde::Serialize;

/// Bootstrap name-service contract on mainnet.
pub const MAINNET_BOOTSTRAP: &str = "0xdfc81a41a7a1ce6ed99e27f9aa1ede4f6d97c7d0";
/// Bootstrap name-service contract on testnet.
pub const TESTNET_BOOTSTRAP: &str = "0x26193045954FFdf23859c679c29ad164932ADdA1";

const MAINNET_ENDPOINT: &str = "https://api.zilliqa.com";
const TESTNET_ENDPOINT: &str = "https://dev-api.zilliqa.com";

/// The two supported chain networks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Network {
    Mainnet,
    Testnet,
}

/// Configuration for one network, constructed once per call.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    pub network: Network,
    /// JSON-RPC endpoint of the chain API.
    pub endpoint: String,
    /// Address of the bootstrap name-service contract.
    pub bootstrap_address: String,
}

impl NetworkConfig {
    fn new(network: Network, endpoint: &str, bootstrap_address: &str) -> Self {
        NetworkConfig {
            network,
            endpoint: endpoint.to_string(),
            bootstrap_address: bootstrap_address.to_string(),
        }
    }
}

/// Selects the network configuration for a network name.
///
/// Exactly the literal `"testnet"` selects Testnet; any other string selects
/// Mainnet. The fallback is permissive on purpose — this mirrors how the
/// deployed wallets behave — so a typo silently lands on Mainnet. Callers
/// that need strict validation must validate the name before calling.
pub fn select_network(name: &str) -> NetworkConfig {
    if name == "testnet" {
        NetworkConfig::new(Network::Testnet, TESTNET_ENDPOINT, TESTNET_BOOTSTRAP)
    } else {
        NetworkConfig::new(Network::Mainnet, MAINNET_ENDPOINT, MAINNET_BOOTSTRAP)
    }
}
