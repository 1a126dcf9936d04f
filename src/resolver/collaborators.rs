// src/resolver/collaborators.rs
//! Trait seams for the external services the assembler depends on.
//!
//! The lookup algorithm, the contract-state decoding and the RPC transport
//! all live behind these traits. The assembler only sequences calls to them
//! and reshapes their answers; their errors propagate through it unchanged.

use crate::blockchain::network::NetworkConfig;
use crate::error::ResolverError;
use crate::models::identity::IdentitySnapshot;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// DNS-style name resolver: maps a (username, domain) pair to a contract
/// address via the network's bootstrap contract.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Resolves `username.domain` to an on-chain address.
    ///
    /// `bootstrap_address` is the bootstrap contract address, already
    /// lowercased by the caller.
    ///
    /// # Errors
    /// Implementation-defined lookup failure; the assembler propagates it
    /// without translation or retry.
    async fn resolve_address(
        &self,
        config: &NetworkConfig,
        bootstrap_address: &str,
        username: &str,
        domain: &str,
    ) -> Result<String, ResolverError>;
}

/// Reads a contract's full on-chain state into an [`IdentitySnapshot`].
#[async_trait]
pub trait StateReader: Send + Sync {
    /// Fetches and decodes the identity state of the contract at `address`.
    ///
    /// # Errors
    /// Network or decoding failure; propagated unchanged, no partial
    /// snapshot is ever produced.
    async fn fetch_state(
        &self,
        config: &NetworkConfig,
        address: &str,
    ) -> Result<IdentitySnapshot, ResolverError>;
}

/// Fetches a single named slice of a contract's persisted key/value storage.
#[async_trait]
pub trait SubStateFetcher: Send + Sync {
    /// Fetches the sub-state stored under `key` for the contract at
    /// `address`.
    ///
    /// # Returns
    /// - `Ok(Some(map))` with the raw key/value object when the key exists
    /// - `Ok(None)` when the key is absent on chain
    ///
    /// # Errors
    /// Transport or payload failure; propagated unchanged.
    async fn get_sub_state(
        &self,
        config: &NetworkConfig,
        address: &str,
        key: &str,
    ) -> Result<Option<Map<String, Value>>, ResolverError>;
}
