// src/resolver/mod.rs
//! Document resolution: collaborator seams, the version gate and the
//! assembler that ties them together.

pub mod assembler;
pub mod collaborators;
pub mod version;
