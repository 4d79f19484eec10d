//! Infrastructure layer for Coursesmith.
//!
//! Contains implementations of the repository traits defined in
//! `coursesmith-core`: SQLite storage for sessions and templates, plus the
//! `config.toml` loader.

pub mod config;
pub mod sqlite;
