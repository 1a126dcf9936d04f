// src/lib.rs

//! # SSI Resolver
//!
//! Client-side library that resolves a decentralized-identifier (DID)
//! document from an SSI smart contract's persisted key/value sub-states,
//! and validates the human-readable usernames that map to such identifiers.
//!
//! ## Architecture Overview
//! 1. **Blockchain Layer**: network selection and the JSON-RPC sub-state
//!    client
//! 2. **Resolver Layer**: collaborator traits, the contract version gate
//!    and the document assembler
//! 3. **Models**: on-chain identity snapshot and the display-ready document
//! 4. **Utils**: username validation
//!
//! The heavy lifting — name lookup and full contract-state decoding — lives
//! behind the [`resolver::collaborators`] traits so wallets can plug in
//! their own implementations; this crate ships a concrete
//! [`blockchain::rpc_client::ChainRpcClient`] for the sub-state fetches.
//!
//! ## Example
//! ```no_run
//! use ssi_resolver::{ChainRpcClient, DocumentAssembler};
//! # use ssi_resolver::resolver::collaborators::{NameResolver, StateReader};
//! # async fn example<R: NameResolver, S: StateReader>(resolver: R, reader: S) {
//! let assembler = DocumentAssembler::new(resolver, reader, ChainRpcClient::new());
//! let document = assembler.resolve("testnet", "0x...").await.unwrap();
//! println!("{} (version {})", document.did, document.version);
//! # }
//! ```

// Module declarations (organized by functional domain)
pub mod blockchain; // network selection and chain RPC
pub mod error; // failure taxonomy
pub mod models; // data structures
pub mod resolver; // document assembly
pub mod utils; // username validation helpers

pub use blockchain::network::{select_network, Network, NetworkConfig};
pub use blockchain::rpc_client::ChainRpcClient;
pub use error::ResolverError;
pub use models::document::{DocEntry, DocValue, ResolvedDocument};
pub use models::identity::{AdtValue, IdentitySnapshot, ServiceValue};
pub use resolver::assembler::{unwrap_keys, DocumentAssembler, NOT_ACTIVATED};
pub use utils::validation::{is_admin_username, is_valid_username};
