//! Shared domain types for Coursesmith.
//!
//! This crate contains the core domain types used across the Coursesmith
//! authoring console: Session, Screen, Action (the closed content sum type
//! and its default registry), Word, Template, and their associated error
//! types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod action;
pub mod config;
pub mod error;
pub mod session;
pub mod template;
pub mod word;
