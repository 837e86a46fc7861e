//! Allowlist compilation and lookup.
//!
//! The allowlist is a fixed set of program ids, each tagged with the payload
//! decoder (if any) the validator should run for it. Built once at startup and
//! shared read-only afterwards.

use std::collections::HashMap;

use swapgate_core::error::{Result, SwapGateError};
use swapgate_core::programs;
use swapgate_core::ProgramId;

pub use crate::config::schema::{DecoderTag, ProgramRule};

/// Immutable program allowlist.
#[derive(Debug, Clone, Default)]
pub struct AllowlistPolicy {
    entries: HashMap<ProgramId, DecoderTag>,
}

impl AllowlistPolicy {
    /// Build from explicit entries. Later duplicates overwrite earlier ones;
    /// config compilation rejects duplicates before reaching here.
    pub fn new(entries: impl IntoIterator<Item = (ProgramId, DecoderTag)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Deployment default for the swap agent: router, token, associated
    /// token, compute budget, and the system program with transfer monitoring.
    pub fn swap_default() -> Result<Self> {
        let defaults = [
            (programs::JUPITER_V6_PROGRAM, DecoderTag::None),
            (programs::TOKEN_PROGRAM, DecoderTag::None),
            (programs::ASSOCIATED_TOKEN_PROGRAM, DecoderTag::None),
            (programs::COMPUTE_BUDGET_PROGRAM, DecoderTag::None),
            (programs::SYSTEM_PROGRAM, DecoderTag::SystemTransfer),
        ];

        let mut entries = Vec::with_capacity(defaults.len());
        for (id, tag) in defaults {
            entries.push((id.parse::<ProgramId>()?, tag));
        }
        Ok(Self::new(entries))
    }

    pub fn is_allowed(&self, id: &ProgramId) -> bool {
        self.entries.contains_key(id)
    }

    /// Decoder for an allowed id; `None` for unknown ids and undecoded programs.
    pub fn decoder_for(&self, id: &ProgramId) -> Option<DecoderTag> {
        match self.entries.get(id) {
            Some(DecoderTag::None) | None => None,
            Some(tag) => Some(*tag),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProgramId, &DecoderTag)> {
        self.entries.iter()
    }
}

/// Compile config rules into a policy. Bad ids and duplicates are config errors.
pub fn compile_program_rules(raw: &[ProgramRule]) -> Result<AllowlistPolicy> {
    let mut entries: HashMap<ProgramId, DecoderTag> = HashMap::with_capacity(raw.len());
    for rule in raw {
        let id: ProgramId = rule.id.parse().map_err(|e| {
            SwapGateError::Config(format!("invalid programs entry {}: {e}", rule.id))
        })?;
        if entries.insert(id, rule.decoder).is_some() {
            return Err(SwapGateError::Config(format!(
                "duplicate programs entry: {}",
                rule.id
            )));
        }
    }
    Ok(AllowlistPolicy { entries })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn rule(id: &str, decoder: DecoderTag) -> ProgramRule {
        ProgramRule {
            id: id.to_string(),
            label: None,
            decoder,
        }
    }

    #[test]
    fn default_policy_contents() {
        let p = AllowlistPolicy::swap_default().unwrap();
        assert_eq!(p.len(), 5);

        let system: ProgramId = programs::SYSTEM_PROGRAM.parse().unwrap();
        let token: ProgramId = programs::TOKEN_PROGRAM.parse().unwrap();
        assert!(p.is_allowed(&system));
        assert_eq!(p.decoder_for(&system), Some(DecoderTag::SystemTransfer));
        assert!(p.is_allowed(&token));
        assert_eq!(p.decoder_for(&token), None);
    }

    #[test]
    fn unknown_id_has_no_decoder() {
        let p = AllowlistPolicy::swap_default().unwrap();
        let stranger = ProgramId::new_from_array([9u8; 32]);
        assert!(!p.is_allowed(&stranger));
        assert_eq!(p.decoder_for(&stranger), None);
    }

    #[test]
    fn compile_rejects_duplicates_and_bad_ids() {
        let dup = [
            rule(programs::TOKEN_PROGRAM, DecoderTag::None),
            rule(programs::TOKEN_PROGRAM, DecoderTag::None),
        ];
        let e = compile_program_rules(&dup).expect_err("duplicate");
        assert_eq!(e.code().as_str(), "CONFIG");

        let bad = [rule("definitely not base58", DecoderTag::None)];
        assert!(compile_program_rules(&bad).is_err());
    }
}
