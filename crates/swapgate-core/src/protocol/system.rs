//! Native transfer instruction decoding (panic-free).
//!
//! Layout:
//! - offset 0: u32 LE instruction discriminator (transfer = 2)
//! - offset 4: u64 LE amount in lamports
//!
//! Trailing bytes past offset 12 are ignored.
//!
//! Parsing rules:
//! - Never index (`buf[0]`) — always use `Buf` and `remaining()` checks.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.

use bytes::Buf;

use crate::error::{Result, SwapGateError};

/// Discriminator of the system program's `Transfer` instruction.
pub const SYSTEM_TRANSFER_DISCRIMINATOR: u32 = 2;

/// Minimum payload length of a transfer: discriminator + amount.
pub const SYSTEM_TRANSFER_MIN_LEN: usize = 4 + 8;

/// Decoded native transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemTransfer {
    /// Amount moved, in the chain's smallest unit.
    pub lamports: u64,
}

/// Decode a system transfer payload.
pub fn decode_system_transfer(payload: &[u8]) -> Result<SystemTransfer> {
    let mut buf = payload;

    if buf.remaining() < SYSTEM_TRANSFER_MIN_LEN {
        return Err(SwapGateError::Undecodable(format!(
            "payload too short ({} < {SYSTEM_TRANSFER_MIN_LEN})",
            buf.remaining()
        )));
    }

    let discriminator = buf.get_u32_le();
    if discriminator != SYSTEM_TRANSFER_DISCRIMINATOR {
        return Err(SwapGateError::Undecodable(format!(
            "not a transfer (discriminator {discriminator})"
        )));
    }

    let lamports = buf.get_u64_le();
    Ok(SystemTransfer { lamports })
}

/// Encode a transfer payload. Used by callers building test fixtures.
pub fn encode_system_transfer(lamports: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(SYSTEM_TRANSFER_MIN_LEN);
    out.extend_from_slice(&SYSTEM_TRANSFER_DISCRIMINATOR.to_le_bytes());
    out.extend_from_slice(&lamports.to_le_bytes());
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_amount_little_endian() {
        let mut p = vec![2, 0, 0, 0];
        p.extend_from_slice(&200_000_000u64.to_le_bytes());
        let t = decode_system_transfer(&p).unwrap();
        assert_eq!(t.lamports, 200_000_000);
    }

    #[test]
    fn ignores_trailing_bytes() {
        let mut p = encode_system_transfer(7);
        p.extend_from_slice(&[0xff; 20]);
        assert_eq!(decode_system_transfer(&p).unwrap().lamports, 7);
    }

    #[test]
    fn short_payloads_are_undecodable() {
        for len in [0usize, 1, 4, 11] {
            let p = vec![2u8; len];
            let e = decode_system_transfer(&p).expect_err("too short");
            assert_eq!(e.code().as_str(), "UNDECODABLE", "len={len}");
        }
    }

    #[test]
    fn other_discriminators_are_undecodable() {
        // CreateAccount (0) with a plausible body.
        let mut p = vec![0, 0, 0, 0];
        p.extend_from_slice(&u64::MAX.to_le_bytes());
        assert!(decode_system_transfer(&p).is_err());
    }
}
