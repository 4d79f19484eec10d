//! Repository trait definitions (ports).
//!
//! These traits define the persistence interface that the infrastructure
//! layer (coursesmith-infra) implements. The core crate never depends on any
//! specific storage technology.

pub mod session;
pub mod template;
