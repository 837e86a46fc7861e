//! swapgate guard library entry.
//!
//! This crate wires the allowlist policy, transfer monitor, validator, config,
//! and metrics into the pre-signing gate. It is consumed by the binary
//! (`main.rs`), by embedding signers, and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod policy;

pub use app_state::GuardState;
pub use policy::{InstructionValidator, ValidationResult};
