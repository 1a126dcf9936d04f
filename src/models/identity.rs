// src/models/identity.rs
//! On-chain identity state as read from an SSI smart contract.
//!
//! The shapes here mirror what the external state reader produces from the
//! contract's persisted key/value storage. Quirks of the upstream Scilla
//! encoding (notably the dual shape of service values) are preserved
//! faithfully and decoded by one explicit rule, not "fixed".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A Scilla ADT value as it appears in decoded contract state JSON.
///
/// # Fields
/// - `constructor`: fully qualified constructor name
/// - `argtypes`: type arguments, carried through unchanged
/// - `arguments`: positional constructor arguments
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdtValue {
    pub constructor: String,
    #[serde(default)]
    pub argtypes: Vec<Value>,
    #[serde(default)]
    pub arguments: Vec<Value>,
}

/// A DID service value in one of its two upstream encodings.
///
/// Older contracts store the service endpoint directly as a string; newer
/// ones wrap it in an ADT whose first positional argument is the effective
/// value. Both shapes occur in live state, so both must be handled.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceValue {
    /// Plain endpoint string stored directly in the service map.
    Direct(String),
    /// Endpoint nested one level inside a tagged ADT wrapper.
    Wrapped(AdtValue),
}

impl ServiceValue {
    /// Returns the effective endpoint under the unwrapping rule: a direct
    /// value is used as-is; a wrapped value's first positional argument is
    /// the endpoint. A wrapped value with no string argument yields the
    /// empty string rather than an error.
    pub fn endpoint(&self) -> String {
        match self {
            ServiceValue::Direct(value) => value.clone(),
            ServiceValue::Wrapped(adt) => adt
                .arguments
                .first()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Snapshot of an SSI contract's identity state, as produced by the external
/// state reader for one resolve call.
///
/// The assembler only reads this; it is created at the start of a call and
/// discarded at its end. An empty `identifier` means the identity exists on
/// chain but has not been activated yet.
#[derive(Clone, Debug)]
pub struct IdentitySnapshot {
    /// The decentralized identifier string; empty when not yet activated.
    pub identifier: String,
    /// Address controlling the identity.
    pub controller: String,
    /// DID services in contract storage order.
    pub services: Vec<(String, ServiceValue)>,
    /// Key material by role name, e.g. `"update"` -> hex public key.
    pub verification_methods: HashMap<String, String>,
    /// Current status of the identity (e.g. operational, deactivated).
    pub status: String,
    /// Decentralized key-management metadata, opaque to this crate and
    /// carried through to the resolved document unchanged.
    pub dkms: Value,
}

/// A verification-method role: the key it is stored under in contract state
/// and the label it is displayed with in the resolved document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerificationRole {
    pub key: &'static str,
    pub label: &'static str,
}

/// The 12 verification-method roles an SSI contract can carry, in canonical
/// display order. Absent roles are omitted from the document entirely, so
/// the emitted list length is data-dependent.
pub const VERIFICATION_ROLES: [VerificationRole; 12] = [
    VerificationRole { key: "socialrecovery", label: "social-recovery key" },
    VerificationRole { key: "update", label: "update key" },
    VerificationRole { key: "dex", label: "decentralized-exchange key" },
    VerificationRole { key: "stake", label: "staking key" },
    VerificationRole { key: "general", label: "general-purpose key" },
    VerificationRole { key: "authentication", label: "authentication key" },
    VerificationRole { key: "assertion", label: "assertion key" },
    VerificationRole { key: "agreement", label: "agreement key" },
    VerificationRole { key: "invocation", label: "invocation key" },
    VerificationRole { key: "delegation", label: "delegation key" },
    VerificationRole { key: "vc", label: "verifiable-credential key" },
    VerificationRole { key: "defi", label: "decentralized-finance key" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn direct_service_value_is_used_as_is() {
        let value = ServiceValue::Direct("https://tyron.network".to_string());
        assert_eq!(value.endpoint(), "https://tyron.network");
    }

    #[test]
    fn wrapped_service_value_unwraps_first_argument() {
        let value = ServiceValue::Wrapped(AdtValue {
            constructor: "Pair".to_string(),
            argtypes: vec![json!("String"), json!("String")],
            arguments: vec![json!("https://example.com"), json!("ignored")],
        });
        assert_eq!(value.endpoint(), "https://example.com");
    }

    #[test]
    fn wrapped_service_value_without_arguments_yields_empty() {
        let value = ServiceValue::Wrapped(AdtValue {
            constructor: "None".to_string(),
            argtypes: vec![],
            arguments: vec![],
        });
        assert_eq!(value.endpoint(), "");
    }

    #[test]
    fn role_table_has_fixed_order() {
        assert_eq!(VERIFICATION_ROLES.len(), 12);
        assert_eq!(VERIFICATION_ROLES[0].key, "socialrecovery");
        assert_eq!(VERIFICATION_ROLES[1].key, "update");
        assert_eq!(VERIFICATION_ROLES[11].label, "decentralized-finance key");
    }
}
