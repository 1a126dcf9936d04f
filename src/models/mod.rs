// src/models/mod.rs
//! Data structures shared across the resolver.

pub mod document;
pub mod identity;
