//! Business logic and repository trait definitions for Coursesmith.
//!
//! This crate holds the session builder engine (the in-memory screen/action
//! document model and its mutation API), the rich text tokenizer and
//! selection editor, the template signature logic, and the "ports"
//! (repository traits) that the infrastructure layer implements. It depends
//! only on `coursesmith-types` -- never on `coursesmith-infra` or any
//! database/IO crate.

pub mod builder;
pub mod repository;
pub mod richtext;
pub mod service;
pub mod template;
