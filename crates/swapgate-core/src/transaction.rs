//! Instruction and transaction values as handed over by the quoting service.

use bytes::Bytes;

use crate::address::{Address, ProgramId};

/// Account handle referenced by an instruction. Opaque to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRef {
    pub address: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountRef {
    pub fn new(address: Address, is_signer: bool, is_writable: bool) -> Self {
        Self { address, is_signer, is_writable }
    }
}

/// One atomic operation within a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub program_id: ProgramId,
    pub accounts: Vec<AccountRef>,
    /// Attacker-controlled payload; may be empty or arbitrarily large.
    pub data: Bytes,
}

impl Instruction {
    pub fn new(program_id: ProgramId, accounts: Vec<AccountRef>, data: impl Into<Bytes>) -> Self {
        Self {
            program_id,
            accounts,
            data: data.into(),
        }
    }
}

/// Ordered instruction list. Order is execution order and is never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub instructions: Vec<Instruction>,
}

impl Transaction {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl<'a> IntoIterator for &'a Transaction {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
