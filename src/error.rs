// src/error.rs
//! Error types for the SSI resolver.
//!
//! Every failure aborts the whole resolve call and is surfaced to the caller;
//! nothing is caught and suppressed inside this crate. Callers must treat any
//! error as "no document available" — there are no partial results.

use thiserror::Error;

/// Boxed error type used to carry collaborator failures through unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures that can abort a resolve or address-lookup call.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The name resolver or the contract-state reader failed. The underlying
    /// error is carried through unchanged (no translation, no retry).
    #[error("resolution failed: {0}")]
    Resolution(#[source] BoxError),

    /// An RPC fetch of a named contract sub-state failed, or the sub-state
    /// payload did not have the expected shape.
    #[error("sub-state fetch failed for key '{key}': {source}")]
    SubState {
        /// The sub-state key that was requested, e.g. `"social_guardians"`.
        key: String,
        #[source]
        source: BoxError,
    },

    /// The deployed contract's version is missing or too old to resolve.
    /// The display text is user-facing and must stay stable.
    #[error("Upgrade required: deploy a new SSI.")]
    UpgradeRequired,
}

impl ResolverError {
    /// Wraps a collaborator failure as a resolution error.
    pub fn resolution<E: Into<BoxError>>(source: E) -> Self {
        ResolverError::Resolution(source.into())
    }

    /// Wraps a failure while fetching the given sub-state key.
    pub fn sub_state<E: Into<BoxError>>(key: &str, source: E) -> Self {
        ResolverError::SubState {
            key: key.to_string(),
            source: source.into(),
        }
    }
}
