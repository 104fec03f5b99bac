//! Transaction identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a transaction: a 32-byte hash.
///
/// Wraps the raw hash bytes and implements `Ord` for deterministic ordering.
/// Displayed and parsed as 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TxId([u8; 32]);

/// Error parsing a transaction id from hex.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TxIdError {
    /// Input was not valid hex.
    #[error("Invalid hex in txid: {0}")]
    InvalidHex(String),
    /// Input decoded to the wrong number of bytes.
    #[error("Txid must be 32 bytes, got {0}")]
    WrongLength(usize),
}

impl TxId {
    /// Create a TxId from raw hash bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a TxId from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TxIdError> {
        let bytes = hex::decode(s).map_err(|e| TxIdError::InvalidHex(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| TxIdError::WrongLength(bytes.len()))?;
        Ok(Self(arr))
    }

    /// Get the raw hash bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex representation (64 lowercase characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Build a TxId from a u128 (low 16 bytes set, rest zero).
    ///
    /// Mostly useful for tests and synthetic graphs.
    pub fn from_u128(n: u128) -> Self {
        let mut bytes = [0u8; 32];
        bytes[16..].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for TxId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}
