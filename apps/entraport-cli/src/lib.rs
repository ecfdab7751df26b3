//! Library surface of the entraport CLI.
//!
//! The binary in `main.rs` is a thin wrapper over these modules; they are
//! exposed as a library so integration tests can drive the export directly.

pub mod config;
pub mod error;
pub mod export;
