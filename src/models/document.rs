// src/models/document.rs
//! The display-ready document produced by a resolve call.

use serde::Serialize;
use serde_json::Value;

/// One labeled section of the resolved document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocEntry {
    pub label: String,
    pub value: DocValue,
}

impl DocEntry {
    pub fn text(label: &str, value: String) -> Self {
        DocEntry {
            label: label.to_string(),
            value: DocValue::Text(value),
        }
    }

    pub fn services(label: &str, services: Vec<(String, String)>) -> Self {
        DocEntry {
            label: label.to_string(),
            value: DocValue::Services(services),
        }
    }

    pub fn keys(label: &str, keys: Vec<String>) -> Self {
        DocEntry {
            label: label.to_string(),
            value: DocValue::Keys(keys),
        }
    }
}

/// Value of a document section. Serialized untagged so display consumers
/// see the plain string, pair list, or key list directly.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocValue {
    /// A single display string, e.g. the identifier itself.
    Text(String),
    /// Service id / endpoint pairs.
    Services(Vec<(String, String)>),
    /// Key material for one verification-method role.
    Keys(Vec<String>),
}

/// The normalized record describing an identity's current state.
///
/// Constructed fresh on every resolve call; nothing is cached or persisted.
/// Resolution is all-or-nothing, so a caller holding one of these can rely
/// on every field having been fetched successfully, version gate included.
#[derive(Clone, Debug, Serialize)]
pub struct ResolvedDocument {
    /// The decentralized identifier, or `"Not activated yet"`.
    pub did: String,
    /// Raw version string from the contract's `version` sub-state.
    pub version: String,
    /// Identity status as reported by the contract.
    pub status: String,
    /// Controller address.
    pub controller: String,
    /// Ordered display sections: identifier, services, then present
    /// verification-method roles in canonical order.
    pub doc: Vec<DocEntry>,
    /// Opaque key-management metadata, carried through unchanged.
    pub dkms: Value,
    /// Social-recovery guardian addresses, in contract storage order.
    pub guardians: Vec<String>,
}
