//! swapgate core: Solana transaction primitives, payload decoders, and the
//! shared error type.
//!
//! The guard crate consumes these types to decide whether a transaction
//! assembled by an untrusted quoting service may be signed. Nothing here
//! performs I/O or holds global state.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Instruction payloads are attacker-controlled; every decoder reports
//! malformed bytes as `SwapGateError` instead of panicking or indexing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod address;
pub mod error;
pub mod programs;
pub mod protocol;
pub mod transaction;

pub use address::{Address, ProgramId};
/// Shared result type.
pub use error::{Result, SwapGateError};
pub use transaction::{AccountRef, Instruction, Transaction};
