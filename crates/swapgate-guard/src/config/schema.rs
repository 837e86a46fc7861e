use serde::Deserialize;
use swapgate_core::error::{Result, SwapGateError};

use crate::policy::monitor::DEFAULT_TRANSFER_THRESHOLD_LAMPORTS;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    pub version: u32,

    pub programs: Vec<ProgramRule>,

    #[serde(default)]
    pub monitor: MonitorSection,

    #[serde(default)]
    pub limits: ResourceLimits,
}

impl GateConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SwapGateError::UnsupportedVersion);
        }
        if self.programs.is_empty() {
            return Err(SwapGateError::Config("programs must not be empty".into()));
        }

        self.monitor.validate()?;
        self.limits.validate()?;

        Ok(())
    }
}

/// One allowlist entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramRule {
    /// Base58 program id.
    pub id: String,
    /// Free-form name for operators; not used for matching.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub decoder: DecoderTag,
}

/// Payload decoder attached to an allowed program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecoderTag {
    #[default]
    None,
    SystemTransfer,
}

/// What to do with a decoder-tagged payload that does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndecodableMode {
    /// Treat as "nothing to report".
    #[default]
    Ignore,
    /// Reject the transaction.
    Reject,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    #[serde(default = "default_transfer_threshold_lamports")]
    pub transfer_threshold_lamports: u64,

    #[serde(default)]
    pub undecodable: UndecodableMode,
}

impl Default for MonitorSection {
    fn default() -> Self {
        Self {
            transfer_threshold_lamports: default_transfer_threshold_lamports(),
            undecodable: UndecodableMode::default(),
        }
    }
}

impl MonitorSection {
    pub fn validate(&self) -> Result<()> {
        if self.transfer_threshold_lamports == 0 {
            return Err(SwapGateError::Config(
                "monitor.transfer_threshold_lamports must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_transfer_threshold_lamports() -> u64 {
    DEFAULT_TRANSFER_THRESHOLD_LAMPORTS
}

/// Optional resource bounds. Unset means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceLimits {
    #[serde(default)]
    pub max_instructions: Option<usize>,
    #[serde(default)]
    pub max_payload_bytes: Option<usize>,
}

impl ResourceLimits {
    pub fn validate(&self) -> Result<()> {
        if self.max_instructions == Some(0) {
            return Err(SwapGateError::Config(
                "limits.max_instructions must be greater than 0".into(),
            ));
        }
        if self.max_payload_bytes == Some(0) {
            return Err(SwapGateError::Config(
                "limits.max_payload_bytes must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
