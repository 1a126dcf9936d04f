// src/resolver/assembler.rs
//! Document assembly for SSI identities.
//!
//! The assembler orchestrates the three external collaborators in a fixed
//! order — full-state fetch, guardian sub-state, version sub-state — and
//! reshapes their answers into a display-ready [`ResolvedDocument`].
//! Resolution is all-or-nothing: any collaborator failure or a failed
//! version gate aborts the whole call, and the caller never sees a partial
//! document.

use crate::blockchain::network::{select_network, NetworkConfig};
use crate::error::ResolverError;
use crate::models::document::{DocEntry, ResolvedDocument};
use crate::models::identity::VERIFICATION_ROLES;
use crate::resolver::collaborators::{NameResolver, StateReader, SubStateFetcher};
use crate::resolver::version::VersionTag;
use log::info;
use serde_json::{Map, Value};

/// Sentinel identifier for an identity that exists on chain but has not
/// been activated yet.
pub const NOT_ACTIVATED: &str = "Not activated yet";

const GUARDIANS_KEY: &str = "social_guardians";
const VERSION_KEY: &str = "version";

/// Assembles display-ready DID documents from on-chain state.
///
/// Stateless apart from its collaborators: every call builds its entities
/// from scratch and discards them at the end, so arbitrarily many calls may
/// run concurrently without coordination. The three remote fetches within
/// one `resolve` call are sequential.
pub struct DocumentAssembler<R, S, F> {
    name_resolver: R,
    state_reader: S,
    sub_state: F,
}

impl<R, S, F> DocumentAssembler<R, S, F>
where
    R: NameResolver,
    S: StateReader,
    F: SubStateFetcher,
{
    /// Creates an assembler over the given collaborators.
    pub fn new(name_resolver: R, state_reader: S, sub_state: F) -> Self {
        DocumentAssembler {
            name_resolver,
            state_reader,
            sub_state,
        }
    }

    /// Resolves a (username, domain) pair to an on-chain address via the
    /// network's bootstrap contract.
    ///
    /// # Arguments
    /// * `net` - network name; anything but `"testnet"` means mainnet
    /// * `username` - the human-readable name to look up
    /// * `domain` - the name's domain
    ///
    /// # Errors
    /// Propagates the name resolver's failure unchanged.
    pub async fn fetch_address(
        &self,
        net: &str,
        username: &str,
        domain: &str,
    ) -> Result<String, ResolverError> {
        let config = select_network(net);
        let bootstrap = config.bootstrap_address.to_lowercase();
        self.name_resolver
            .resolve_address(&config, &bootstrap, username, domain)
            .await
    }

    /// Resolves the identity at `address` into a display-ready document.
    ///
    /// # Process Flow
    /// 1. Select the network configuration (never fails)
    /// 2. Fetch the full identity snapshot
    /// 3. Build the document sections: identifier, services (if any), then
    ///    the present verification-method roles in canonical order
    /// 4. Fetch the `social_guardians` sub-state and keep its keys
    /// 5. Fetch the `version` sub-state and apply the version gate
    ///
    /// The version gate runs last even though it could run first: the most
    /// informative error should be the one the caller sees, and a stale
    /// contract still fails the whole call either way.
    ///
    /// # Errors
    /// - [`ResolverError::Resolution`] when the state reader fails
    /// - [`ResolverError::SubState`] when either sub-state fetch fails
    /// - [`ResolverError::UpgradeRequired`] when the contract's version is
    ///   missing or unsupported
    pub async fn resolve(
        &self,
        net: &str,
        address: &str,
    ) -> Result<ResolvedDocument, ResolverError> {
        let config = select_network(net);
        let state = self.state_reader.fetch_state(&config, address).await?;

        let did = if state.identifier.is_empty() {
            NOT_ACTIVATED.to_string()
        } else {
            state.identifier.clone()
        };

        let mut doc = vec![DocEntry::text("Decentralized identifier", did.clone())];

        if !state.services.is_empty() {
            let services: Vec<(String, String)> = state
                .services
                .iter()
                .map(|(id, value)| (id.clone(), value.endpoint()))
                .collect();
            doc.push(DocEntry::services("DID services", services));
        }

        for role in VERIFICATION_ROLES {
            if let Some(key_material) = state.verification_methods.get(role.key) {
                doc.push(DocEntry::keys(role.label, vec![key_material.clone()]));
            }
        }

        let guardians = self.fetch_guardians(&config, address).await?;
        let version = self.check_version(&config, address).await?;

        Ok(ResolvedDocument {
            did,
            version,
            status: state.status,
            controller: state.controller,
            doc,
            dkms: state.dkms,
            guardians,
        })
    }

    /// Fetches the guardian sub-state and unwraps it to an address list.
    /// A contract without the sub-state (or with a malformed one) fails the
    /// call; a contract with an empty guardian map yields an empty list.
    async fn fetch_guardians(
        &self,
        config: &NetworkConfig,
        address: &str,
    ) -> Result<Vec<String>, ResolverError> {
        let guardian_map = self
            .sub_state
            .get_sub_state(config, address, GUARDIANS_KEY)
            .await?
            .and_then(|mut result| result.remove(GUARDIANS_KEY))
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .ok_or_else(|| {
                ResolverError::sub_state(GUARDIANS_KEY, "sub-state missing or not an object")
            })?;
        Ok(unwrap_keys(&guardian_map))
    }

    /// Fetches the version sub-state and applies the compatibility gate.
    /// Returns the raw version string on acceptance.
    async fn check_version(
        &self,
        config: &NetworkConfig,
        address: &str,
    ) -> Result<String, ResolverError> {
        let raw = self
            .sub_state
            .get_sub_state(config, address, VERSION_KEY)
            .await?
            .and_then(|result| {
                result
                    .get(VERSION_KEY)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .ok_or(ResolverError::UpgradeRequired)?;

        let tag = VersionTag::parse(&raw);
        if !tag.is_supported() {
            return Err(ResolverError::UpgradeRequired);
        }
        info!("DID Document version: {}", tag.fragment);
        info!("Address: {}", address);
        Ok(raw)
    }
}

/// Returns the key set of an object-shaped value, dropping the values and
/// preserving their order. Used to turn the guardian sub-state into a plain
/// address list; a malformed input simply yields whatever keys exist.
pub fn unwrap_keys(map: &Map<String, Value>) -> Vec<String> {
    map.keys().cloned().collect()
}
