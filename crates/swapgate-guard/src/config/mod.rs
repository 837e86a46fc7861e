//! Guard config loader (strict parsing).

pub mod schema;

use std::fs;

use swapgate_core::error::{Result, SwapGateError};

pub use schema::{DecoderTag, GateConfig, MonitorSection, ProgramRule, ResourceLimits, UndecodableMode};

pub fn load_from_file(path: &str) -> Result<GateConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SwapGateError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GateConfig> {
    let cfg: GateConfig = serde_yaml::from_str(s)
        .map_err(|e| SwapGateError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
