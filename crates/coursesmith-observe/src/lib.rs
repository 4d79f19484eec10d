//! Structured logging setup for Coursesmith.
//!
//! One call at startup installs the global tracing subscriber; everything
//! else in the workspace just uses the `tracing` macros.

pub mod tracing_setup;

pub use tracing_setup::{LogFormat, init_tracing};
