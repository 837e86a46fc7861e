//! Well-known program addresses (base58).

/// Native value-transfer (system) program.
pub const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";
/// SPL fungible token program.
pub const TOKEN_PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
/// Associated token account program.
pub const ASSOCIATED_TOKEN_PROGRAM: &str = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL";
/// Compute budget program.
pub const COMPUTE_BUDGET_PROGRAM: &str = "ComputeBudget111111111111111111111111111111";
/// Jupiter v6 aggregator (swap router).
pub const JUPITER_V6_PROGRAM: &str = "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4";

/// The system program id in raw form (all zero bytes).
pub const SYSTEM_PROGRAM_ID: crate::ProgramId = crate::Address::new_from_array([0u8; 32]);
