//! Transaction envelope (JSON).
//!
//! Addresses travel as base58 and instruction data as base64, matching what
//! quoting services return for serialized instructions.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{Result, SwapGateError};
use crate::transaction::{AccountRef, Instruction, Transaction};

/// Top-level envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionEnvelope {
    #[serde(default)]
    pub instructions: Vec<InstructionEnvelope>,
}

/// One instruction: program id, account metas, base64 data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstructionEnvelope {
    pub program_id: String,
    #[serde(default)]
    pub accounts: Vec<AccountEnvelope>,
    /// Instruction data, base64. Missing means empty.
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountEnvelope {
    pub pubkey: String,
    #[serde(default)]
    pub is_signer: bool,
    #[serde(default)]
    pub is_writable: bool,
}

impl TransactionEnvelope {
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| SwapGateError::BadRequest(format!("invalid envelope json: {e}")))
    }

    /// Decode every field into a `Transaction`, preserving instruction order.
    pub fn into_transaction(self) -> Result<Transaction> {
        let mut instructions = Vec::with_capacity(self.instructions.len());
        for (index, ix) in self.instructions.into_iter().enumerate() {
            instructions.push(ix.decode().map_err(|e| {
                SwapGateError::BadRequest(format!("instruction {index}: {e}"))
            })?);
        }
        Ok(Transaction::new(instructions))
    }

    pub fn from_transaction(tx: &Transaction) -> Self {
        let instructions = tx
            .iter()
            .map(|ix| InstructionEnvelope {
                program_id: ix.program_id.to_string(),
                accounts: ix
                    .accounts
                    .iter()
                    .map(|a| AccountEnvelope {
                        pubkey: a.address.to_string(),
                        is_signer: a.is_signer,
                        is_writable: a.is_writable,
                    })
                    .collect(),
                data: STANDARD.encode(&ix.data),
            })
            .collect();
        Self { instructions }
    }
}

impl InstructionEnvelope {
    fn decode(self) -> Result<Instruction> {
        let program_id: Address = self.program_id.parse()?;

        let mut accounts = Vec::with_capacity(self.accounts.len());
        for a in self.accounts {
            accounts.push(AccountRef::new(a.pubkey.parse()?, a.is_signer, a.is_writable));
        }

        let data = STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| SwapGateError::BadRequest(format!("invalid base64 data: {e}")))?;

        Ok(Instruction::new(program_id, accounts, data))
    }
}
