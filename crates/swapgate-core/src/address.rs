//! 32-byte account / program addresses with base58 text form.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SwapGateError};

/// Address length in bytes.
pub const ADDRESS_BYTES: usize = 32;

/// An opaque 32-byte address. Compared by exact byte equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_BYTES]);

/// Program identifiers are plain addresses; the alias keeps call sites readable.
pub type ProgramId = Address;

impl Address {
    pub const fn new_from_array(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }

    /// Parse from an arbitrary byte slice, requiring exactly 32 bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; ADDRESS_BYTES] = bytes.try_into().map_err(|_| {
            SwapGateError::InvalidAddress(format!(
                "expected {ADDRESS_BYTES} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

impl FromStr for Address {
    type Err = SwapGateError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = bs58::decode(s)
            .into_vec()
            .map_err(|e| SwapGateError::InvalidAddress(format!("{s}: {e}")))?;
        Self::try_from_slice(&raw)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn system_program_is_all_zero() {
        let id: Address = "11111111111111111111111111111111".parse().unwrap();
        assert_eq!(id, Address::default());
        assert_eq!(id.as_bytes(), &[0u8; ADDRESS_BYTES]);
        assert_eq!(id.to_string(), "11111111111111111111111111111111");
    }

    #[test]
    fn display_matches_parsed_text() {
        let s = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let id: Address = s.parse().unwrap();
        assert_eq!(id.to_string(), s);
    }

    #[test]
    fn rejects_wrong_length_and_bad_alphabet() {
        let short = "1111".parse::<Address>().expect_err("too short");
        assert_eq!(short.code().as_str(), "INVALID_ADDRESS");

        // '0' and 'O' are not in the base58 alphabet.
        let bad = "0OOOOOOOOOOOOOOOOOOOOOOOOOOOOOOO".parse::<Address>();
        assert!(bad.is_err());
    }
}
