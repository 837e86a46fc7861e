//! Payload decoders and interchange formats.
//!
//! - `system`: the native value-transfer instruction layout (binary).
//! - `envelope`: JSON form of a transaction for crossing process boundaries.
//!
//! All parsers are panic-free: malformed input is reported as `SwapGateError`
//! instead of panicking or indexing raw buffers, since every byte here comes
//! from an untrusted quoting service.

pub mod envelope;
pub mod system;
