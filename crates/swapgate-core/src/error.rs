//! Shared error type across swapgate crates.

use thiserror::Error;

/// Stable error codes (CLI output, test assertions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid input / malformed envelope.
    BadRequest,
    /// Text form of an address is not 32 bytes of base58.
    InvalidAddress,
    /// Instruction payload does not match the expected layout.
    Undecodable,
    /// Configuration rejected by validation.
    Config,
    /// Unsupported config / envelope version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InvalidAddress => "INVALID_ADDRESS",
            ErrorCode::Undecodable => "UNDECODABLE",
            ErrorCode::Config => "CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SwapGateError>;

/// Unified error type used by core and guard.
///
/// Validation itself never produces one of these; a transaction verdict is a
/// value, not an error. These cover config loading and envelope parsing.
#[derive(Debug, Error)]
pub enum SwapGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("undecodable payload: {0}")]
    Undecodable(String),
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SwapGateError {
    /// Map error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SwapGateError::BadRequest(_) => ErrorCode::BadRequest,
            SwapGateError::InvalidAddress(_) => ErrorCode::InvalidAddress,
            SwapGateError::Undecodable(_) => ErrorCode::Undecodable,
            SwapGateError::Config(_) => ErrorCode::Config,
            SwapGateError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            SwapGateError::Internal(_) => ErrorCode::Internal,
        }
    }
}
