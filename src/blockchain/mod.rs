// src/blockchain/mod.rs
//! Chain-facing pieces: network selection and the JSON-RPC client.

pub mod network;
pub mod rpc_client;
