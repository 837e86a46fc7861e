//! Transfer monitor: flags native transfers above a threshold.
//!
//! Decoding failure and "amount below threshold" both yield no advisory.
//! `classify` keeps them apart for callers running the strict undecodable mode.

use swapgate_core::protocol::system::decode_system_transfer;

/// 0.1 SOL in lamports.
pub const DEFAULT_TRANSFER_THRESHOLD_LAMPORTS: u64 = 100_000_000;

/// Outcome of inspecting one payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inspection {
    /// Too short or not a transfer.
    Undecodable,
    /// Transfer at or below the threshold.
    BelowThreshold(u64),
    /// Transfer strictly above the threshold.
    Advisory(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferMonitor {
    threshold_lamports: u64,
}

impl Default for TransferMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSFER_THRESHOLD_LAMPORTS)
    }
}

impl TransferMonitor {
    pub fn new(threshold_lamports: u64) -> Self {
        Self { threshold_lamports }
    }

    pub fn threshold_lamports(&self) -> u64 {
        self.threshold_lamports
    }

    pub fn classify(&self, payload: &[u8]) -> Inspection {
        match decode_system_transfer(payload) {
            Err(e) => {
                tracing::trace!(error = %e, len = payload.len(), "transfer payload not decoded");
                Inspection::Undecodable
            }
            Ok(t) if t.lamports > self.threshold_lamports => Inspection::Advisory(t.lamports),
            Ok(t) => Inspection::BelowThreshold(t.lamports),
        }
    }

    /// Amount to report, if the payload is a transfer above the threshold.
    pub fn inspect(&self, payload: &[u8]) -> Option<u64> {
        match self.classify(payload) {
            Inspection::Advisory(amount) => Some(amount),
            Inspection::Undecodable | Inspection::BelowThreshold(_) => None,
        }
    }
}
