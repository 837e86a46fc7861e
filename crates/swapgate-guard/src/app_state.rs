//! Shared guard state: compiled allowlist, validator, and metrics.
//!
//! Built once at startup from `GateConfig`; startup errors are returned, not
//! panicked on.

use std::sync::Arc;

use swapgate_core::error::{Result, SwapGateError};
use swapgate_core::programs::SYSTEM_PROGRAM_ID;
use swapgate_core::ProgramId;

use crate::config::GateConfig;
use crate::obs::metrics::GateMetrics;
use crate::policy::allowlist::compile_program_rules;
use crate::policy::{AdvisorySink, AllowlistPolicy, DecoderTag, InstructionValidator, TransferMonitor};

const FAIL_FAST_ON_DECODER_MISMATCH: bool = false; // if changed to true, boot fails.

#[derive(Clone)]
pub struct GuardState {
    inner: Arc<GuardStateInner>,
}

struct GuardStateInner {
    cfg: GateConfig,
    policy: Arc<AllowlistPolicy>,
    validator: Arc<InstructionValidator>,
    metrics: Arc<GateMetrics>,
}

impl GuardState {
    /// Build guard state with the default tracing advisory sink.
    pub fn new(cfg: GateConfig) -> Result<Self> {
        Self::build(cfg, None)
    }

    /// Build guard state routing advisories to `sink`.
    pub fn with_sink(cfg: GateConfig, sink: Arc<dyn AdvisorySink>) -> Result<Self> {
        Self::build(cfg, Some(sink))
    }

    fn build(cfg: GateConfig, sink: Option<Arc<dyn AdvisorySink>>) -> Result<Self> {
        // 1) Compile allowlist
        let policy = compile_program_rules(&cfg.programs)
            .map_err(|e| SwapGateError::Config(format!("allowlist compile failed: {e}")))?;

        // decoder <-> program sanity check
        for rule in &cfg.programs {
            if rule.decoder != DecoderTag::SystemTransfer {
                continue;
            }
            if rule.id.parse::<ProgramId>().ok() != Some(SYSTEM_PROGRAM_ID) {
                tracing::warn!(program_id = %rule.id, label = ?rule.label, "system_transfer decoder attached to a non-system program");
                if FAIL_FAST_ON_DECODER_MISMATCH {
                    return Err(SwapGateError::Config(format!(
                        "system_transfer decoder attached to non-system program: {}",
                        rule.id
                    )));
                }
            }
        }

        // 2) Wire validator
        let policy = Arc::new(policy);
        let metrics = Arc::new(GateMetrics::default());
        let mut validator = InstructionValidator::new(
            Arc::clone(&policy),
            TransferMonitor::new(cfg.monitor.transfer_threshold_lamports),
        )
        .with_limits(cfg.limits)
        .with_undecodable_mode(cfg.monitor.undecodable)
        .with_metrics(Arc::clone(&metrics));
        if let Some(sink) = sink {
            validator = validator.with_sink(sink);
        }

        tracing::info!(
            programs = policy.len(),
            threshold = cfg.monitor.transfer_threshold_lamports,
            undecodable = ?cfg.monitor.undecodable,
            "guard policy loaded"
        );

        Ok(Self {
            inner: Arc::new(GuardStateInner {
                cfg,
                policy,
                validator: Arc::new(validator),
                metrics,
            }),
        })
    }

    pub fn cfg(&self) -> &GateConfig {
        &self.inner.cfg
    }

    pub fn policy(&self) -> Arc<AllowlistPolicy> {
        Arc::clone(&self.inner.policy)
    }

    pub fn validator(&self) -> Arc<InstructionValidator> {
        Arc::clone(&self.inner.validator)
    }

    pub fn metrics(&self) -> Arc<GateMetrics> {
        Arc::clone(&self.inner.metrics)
    }
}
