//! Top-level facade crate for swapgate.
//!
//! Re-exports core types and the guard library so callers can depend on a single crate.

pub mod core {
    pub use swapgate_core::*;
}

pub mod guard {
    pub use swapgate_guard::*;
}
