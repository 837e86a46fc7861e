//! Instruction validator: the single gate in front of signing.
//!
//! One synchronous pass over the instruction list, in order. The first
//! instruction whose program is not allowlisted rejects the whole transaction
//! and nothing after it is inspected. Decoder-tagged programs are handed to
//! the transfer monitor, whose advisories never affect the verdict unless the
//! strict undecodable mode is enabled.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use swapgate_core::{Instruction, ProgramId, Transaction};

pub use crate::config::schema::{ResourceLimits, UndecodableMode};

use super::advisory::{Advisory, AdvisorySink, TracingSink};
use super::allowlist::{AllowlistPolicy, DecoderTag};
use super::monitor::{Inspection, TransferMonitor};
use crate::obs::metrics::GateMetrics;

/// Why a transaction was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Program id not in the allowlist.
    NotAllowlisted,
    /// Decoder-tagged payload could not be decoded (strict mode only).
    UndecodablePayload,
    /// Instruction count limit exceeded (only when configured).
    TooManyInstructions,
    /// Payload size limit exceeded (only when configured).
    PayloadTooLarge,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::NotAllowlisted => "not_allowlisted",
            RejectReason::UndecodablePayload => "undecodable_payload",
            RejectReason::TooManyInstructions => "too_many_instructions",
            RejectReason::PayloadTooLarge => "payload_too_large",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first offending instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub program_id: ProgramId,
    pub index: usize,
    pub reason: RejectReason,
}

/// Verdict for one transaction. Signing must not proceed on `Rejected`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Approved,
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_approved(&self) -> bool {
        matches!(self, ValidationResult::Approved)
    }

    pub fn offending_program_id(&self) -> Option<ProgramId> {
        match self {
            ValidationResult::Approved => None,
            ValidationResult::Rejected(r) => Some(r.program_id),
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationResult::Approved => None,
            ValidationResult::Rejected(r) => Some(r),
        }
    }
}

/// Allowlist validator with embedded transfer monitoring.
/// Construct once at startup, then share via Arc.
pub struct InstructionValidator {
    policy: Arc<AllowlistPolicy>,
    monitor: TransferMonitor,
    sink: Arc<dyn AdvisorySink>,
    limits: ResourceLimits,
    undecodable: UndecodableMode,
    metrics: Option<Arc<GateMetrics>>,
}

impl InstructionValidator {
    pub fn new(policy: Arc<AllowlistPolicy>, monitor: TransferMonitor) -> Self {
        Self {
            policy,
            monitor,
            sink: Arc::new(TracingSink),
            limits: ResourceLimits::default(),
            undecodable: UndecodableMode::default(),
            metrics: None,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn AdvisorySink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_undecodable_mode(mut self, mode: UndecodableMode) -> Self {
        self.undecodable = mode;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<GateMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn policy(&self) -> &AllowlistPolicy {
        &self.policy
    }

    pub fn monitor(&self) -> &TransferMonitor {
        &self.monitor
    }

    /// Decide whether `tx` may be signed. Total over all inputs.
    ///
    /// Advisories are collected during the scan and handed to the sink after
    /// the duration metric is taken, so sink and log latency is not timed.
    pub fn validate(&self, tx: &Transaction) -> ValidationResult {
        let started = Instant::now();
        let mut advisories = Vec::new();
        let result = self.scan(tx, &mut advisories);
        let elapsed = started.elapsed();

        for advisory in &advisories {
            self.emit(advisory);
        }

        match &result {
            ValidationResult::Approved => {
                tracing::debug!(instructions = tx.len(), "transaction approved");
            }
            ValidationResult::Rejected(r) => {
                tracing::warn!(
                    program_id = %r.program_id,
                    index = r.index,
                    reason = %r.reason,
                    "transaction rejected"
                );
            }
        }

        if let Some(m) = &self.metrics {
            m.record_decision(&result, elapsed);
        }
        result
    }

    fn scan(&self, tx: &Transaction, advisories: &mut Vec<Advisory>) -> ValidationResult {
        for (index, ix) in tx.iter().enumerate() {
            if let Some(reason) = self.check_instruction(index, ix, advisories) {
                return ValidationResult::Rejected(Rejection {
                    program_id: ix.program_id,
                    index,
                    reason,
                });
            }
        }
        ValidationResult::Approved
    }

    fn check_instruction(
        &self,
        index: usize,
        ix: &Instruction,
        advisories: &mut Vec<Advisory>,
    ) -> Option<RejectReason> {
        if let Some(max) = self.limits.max_instructions {
            if index >= max {
                return Some(RejectReason::TooManyInstructions);
            }
        }

        if !self.policy.is_allowed(&ix.program_id) {
            return Some(RejectReason::NotAllowlisted);
        }

        if let Some(max) = self.limits.max_payload_bytes {
            if ix.data.len() > max {
                return Some(RejectReason::PayloadTooLarge);
            }
        }

        match self.policy.decoder_for(&ix.program_id) {
            Some(DecoderTag::SystemTransfer) => match self.monitor.classify(&ix.data) {
                Inspection::Advisory(amount) => {
                    advisories.push(Advisory {
                        program_id: ix.program_id,
                        instruction_index: index,
                        amount,
                    });
                    None
                }
                Inspection::BelowThreshold(_) => None,
                Inspection::Undecodable => match self.undecodable {
                    UndecodableMode::Ignore => None,
                    UndecodableMode::Reject => Some(RejectReason::UndecodablePayload),
                },
            },
            Some(DecoderTag::None) | None => None,
        }
    }

    fn emit(&self, advisory: &Advisory) {
        if let Some(m) = &self.metrics {
            m.record_advisory(advisory);
        }
        self.sink.emit(advisory);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::policy::advisory::MemorySink;
    use swapgate_core::programs;
    use swapgate_core::protocol::system::encode_system_transfer;

    fn id(s: &str) -> ProgramId {
        s.parse().unwrap()
    }

    fn ix(program: ProgramId, data: Vec<u8>) -> Instruction {
        Instruction::new(program, vec![], data)
    }

    fn validator() -> (InstructionValidator, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let v = InstructionValidator::new(
            Arc::new(AllowlistPolicy::swap_default().unwrap()),
            TransferMonitor::default(),
        )
        .with_sink(sink.clone());
        (v, sink)
    }

    #[test]
    fn empty_transaction_is_approved() {
        let (v, sink) = validator();
        assert_eq!(v.validate(&Transaction::empty()), ValidationResult::Approved);
        assert!(sink.advisories().is_empty());
    }

    #[test]
    fn large_transfer_advises_but_approves() {
        let (v, sink) = validator();
        let system = id(programs::SYSTEM_PROGRAM);
        let tx = Transaction::new(vec![
            ix(id(programs::COMPUTE_BUDGET_PROGRAM), vec![]),
            ix(system, encode_system_transfer(200_000_000)),
        ]);

        assert!(v.validate(&tx).is_approved());
        assert_eq!(
            sink.advisories(),
            vec![Advisory {
                program_id: system,
                instruction_index: 1,
                amount: 200_000_000,
            }]
        );
    }

    #[test]
    fn strict_mode_rejects_undecodable_system_payload() {
        let (v, _) = validator();
        let v = v.with_undecodable_mode(UndecodableMode::Reject);
        let system = id(programs::SYSTEM_PROGRAM);

        let tx = Transaction::new(vec![ix(system, vec![2, 0, 0])]);
        let r = v.validate(&tx);
        assert_eq!(r.rejection().unwrap().reason, RejectReason::UndecodablePayload);

        // Undecoded programs are unaffected by strict mode.
        let tx = Transaction::new(vec![ix(id(programs::TOKEN_PROGRAM), vec![])]);
        assert!(v.validate(&tx).is_approved());
    }

    #[test]
    fn limits_reject_first_offender() {
        let (v, _) = validator();
        let v = v.with_limits(ResourceLimits {
            max_instructions: Some(2),
            max_payload_bytes: Some(16),
        });
        let token = id(programs::TOKEN_PROGRAM);

        let tx = Transaction::new(vec![ix(token, vec![]), ix(token, vec![]), ix(token, vec![])]);
        let r = *v.validate(&tx).rejection().unwrap();
        assert_eq!(r.index, 2);
        assert_eq!(r.reason, RejectReason::TooManyInstructions);

        let tx = Transaction::new(vec![ix(token, vec![0u8; 17])]);
        let r = *v.validate(&tx).rejection().unwrap();
        assert_eq!(r.reason, RejectReason::PayloadTooLarge);
    }

    #[test]
    fn unlisted_program_wins_over_payload_limit() {
        let (v, _) = validator();
        let v = v.with_limits(ResourceLimits {
            max_instructions: None,
            max_payload_bytes: Some(1),
        });
        let stranger = ProgramId::new_from_array([7u8; 32]);
        let r = v.validate(&Transaction::new(vec![ix(stranger, vec![0u8; 64])]));
        assert_eq!(r.rejection().unwrap().reason, RejectReason::NotAllowlisted);
    }

    struct SlowSink {
        inner: MemorySink,
    }

    impl AdvisorySink for SlowSink {
        fn emit(&self, advisory: &Advisory) {
            std::thread::sleep(std::time::Duration::from_millis(50));
            self.inner.emit(advisory);
        }
    }

    #[test]
    fn duration_metric_excludes_sink_time() {
        let sink = Arc::new(SlowSink { inner: MemorySink::new() });
        let metrics = Arc::new(GateMetrics::default());
        let v = InstructionValidator::new(
            Arc::new(AllowlistPolicy::swap_default().unwrap()),
            TransferMonitor::default(),
        )
        .with_sink(sink.clone())
        .with_metrics(metrics.clone());

        let tx = Transaction::new(vec![ix(
            id(programs::SYSTEM_PROGRAM),
            encode_system_transfer(500_000_000),
        )]);
        assert!(v.validate(&tx).is_approved());
        assert_eq!(sink.inner.advisories().len(), 1);

        // A single-instruction scan lands far below 10ms; the 50ms sink must not count.
        let rendered = metrics.render();
        assert!(
            rendered.contains("swapgate_validate_duration_micros_bucket{outcome=\"approved\",le=\"10000\"} 1"),
            "{rendered}"
        );
    }

    #[test]
    fn advisories_before_a_rejection_are_still_emitted() {
        let (v, sink) = validator();
        let system = id(programs::SYSTEM_PROGRAM);
        let stranger = ProgramId::new_from_array([3u8; 32]);
        let tx = Transaction::new(vec![
            ix(system, encode_system_transfer(300_000_000)),
            ix(stranger, vec![]),
        ]);

        assert_eq!(v.validate(&tx).offending_program_id(), Some(stranger));
        let got = sink.advisories();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].instruction_index, 0);
    }

    #[test]
    fn exposes_configured_monitor() {
        let v = InstructionValidator::new(
            Arc::new(AllowlistPolicy::default()),
            TransferMonitor::new(42),
        );
        assert_eq!(v.monitor().threshold_lamports(), 42);
        assert!(v.policy().is_empty());
    }
}
