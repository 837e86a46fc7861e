//! Policy layer (allowlist, transfer monitor, validator).
//!
//! Compiles the configured program allowlist into a lookup structure and runs
//! the pre-signing validation pass over it.

pub mod advisory;
pub mod allowlist;
pub mod monitor;
pub mod validator;

pub use advisory::{Advisory, AdvisorySink, MemorySink, TracingSink};
pub use allowlist::{AllowlistPolicy, DecoderTag};
pub use monitor::{Inspection, TransferMonitor};
pub use validator::{InstructionValidator, RejectReason, Rejection, ValidationResult};
