//! Advisory side channel.
//!
//! Advisories are observability output for human review. They never change a
//! validation verdict.

use std::sync::Mutex;

use swapgate_core::ProgramId;

/// Large native transfer found inside an allowed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub program_id: ProgramId,
    /// Position of the instruction within its transaction.
    pub instruction_index: usize,
    /// Transferred amount in lamports.
    pub amount: u64,
}

/// Receiver of advisories. Must be callable from concurrent validations.
pub trait AdvisorySink: Send + Sync {
    fn emit(&self, advisory: &Advisory);
}

/// Default sink: structured `warn` log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn emit(&self, advisory: &Advisory) {
        tracing::warn!(
            program_id = %advisory.program_id,
            index = advisory.instruction_index,
            amount = advisory.amount,
            "large native transfer in approved transaction"
        );
    }
}

/// Collects advisories in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    inner: Mutex<Vec<Advisory>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn advisories(&self) -> Vec<Advisory> {
        match self.inner.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        match self.inner.lock() {
            Ok(mut g) => g.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl AdvisorySink for MemorySink {
    fn emit(&self, advisory: &Advisory) {
        // A poisoned lock only means another emitter panicked mid-push; keep recording.
        match self.inner.lock() {
            Ok(mut g) => g.push(*advisory),
            Err(poisoned) => poisoned.into_inner().push(*advisory),
        }
    }
}
